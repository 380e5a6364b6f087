//! Dispatch pipelines: the rules that decide, in order, which of the leaf
//! recognizers and disambiguators applies at the current position.
//!
//! Every pipeline here is a chain of `ScanResult::or_else` calls, the
//! idiomatic stand-in for the C source's `SHORT_SCANNER` early-return macro.

use crate::classify::is_newline;
use crate::cursor::HostLexer;
use crate::disambiguate::{close_layout_in_list, comment, else_, dot, fold, in_, minus, where_};
use crate::indent::IndentStack;
use crate::layout::{dedent, end_or_semicolon, layout_end, layout_start, newline_semicolon, post_end_semicolon, repeat_end};
use crate::recognize::{count_indent, skip_space};
use crate::result::ScanResult;
use crate::symbol::{Symbol, Symbols};

/// End-of-file handling, shared by every pipeline that might run out of
/// input mid-rule (the top-level dispatch, and `block_comment` when a
/// nested comment is never closed).
pub fn eof(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  if !lex.eof() {
    return ScanResult::Continue;
  }
  if syms.is_valid(Symbol::Empty) {
    return ScanResult::Finish(Symbol::Empty);
  }
  end_or_semicolon(indent, syms).or_fail()
}

/// Parsers that must run *before* whitespace is skipped: a qualified-name
/// dot can't have leading whitespace, and a just-recovered-from-error call
/// must refuse to emit anything at all.
pub fn init(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  eof(lex, indent, syms)
    .or_else(|| {
      if syms.after_error() {
        ScanResult::Fail
      } else {
        ScanResult::Continue
      }
    })
    .or_else(|| dot(lex, syms))
    .or_else(|| {
      if syms.is_valid(Symbol::Fold) {
        fold(lex)
      } else {
        ScanResult::Continue
      }
    })
}

/// Skip inline whitespace, then branch on whether the next non-blank
/// character starts a new line or continues the current one.
pub fn scan_main(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  skip_space(lex);
  eof(lex, indent, syms).or_else(|| {
    // Default mark: rules below that consume more than their semantic
    // token re-mark explicitly.
    lex.mark_end();
    if matches!(lex.peek(), Some(c) if is_newline(c)) {
      lex.advance_skip();
      let next_indent = count_indent(lex);
      newline(lex, indent, syms, next_indent)
    } else {
      let column = lex.column();
      immediate(lex, indent, syms, column)
    }
  })
}

/// Rules that run once a newline (and its following indentation) has been
/// consumed.
pub fn newline(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols, next_indent: u32) -> ScanResult {
  eof(lex, indent, syms)
    .or_else(|| comment(lex, indent, syms))
    .or_else(|| newline_token(lex, indent, syms, next_indent))
    .or_else(|| newline_indent(lex, indent, syms, next_indent))
}

/// Rules that decide based on the first token on the new line.
pub fn newline_token(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols, _next_indent: u32) -> ScanResult {
  if lex.peek() == Some('-') {
    return minus(lex);
  }
  if let Some(c) = lex.peek() {
    if crate::classify::is_symbolic(c) || c == '`' {
      // A symbolic operator or a backtick-quoted infix name can never start
      // a new statement, so this position fails outright rather than
      // falling through to the indent-based rules below.
      return ScanResult::Fail;
    }
  }
  if lex.peek() == Some('i') {
    return in_(lex, indent, syms);
  }
  ScanResult::Continue
}

/// Rules that decide based on the indent of the new line relative to the
/// enclosing layout.
///
/// `close_layout_in_list` runs between `dedent` and `newline_semicolon` so
/// that a line starting with `]` or `,` inside a bracketed layout is handled
/// before falling back to the ordinary semicolon-on-same-indent case.
pub fn newline_indent(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols, next_indent: u32) -> ScanResult {
  dedent(indent, syms, next_indent)
    .or_else(|| close_layout_in_list(lex, indent, syms))
    .or_else(|| newline_semicolon(indent, syms, next_indent))
}

/// Parsers for the case where the first non-space character is not a
/// newline: starting a layout, closing layouts left open at the same
/// position, and the inline keyword/punctuation disambiguators.
pub fn immediate(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols, column: u32) -> ScanResult {
  layout_start(indent, syms, column as u16)
    .or_else(|| post_end_semicolon(indent, syms, column))
    .or_else(|| repeat_end(indent, syms, column))
    .or_else(|| inline_tokens(lex, indent, syms))
}

/// Special-cased tokens that can appear at the start of an inline position:
/// `where`, `in`, `else`, a closing `)`, and — as a fallback — `]`/`,`
/// inside a bracketed layout.
pub fn inline_tokens(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  match lex.peek() {
    Some('w') => where_(lex, indent, syms).or_fail(),
    Some('i') => in_(lex, indent, syms).or_fail(),
    Some('e') => else_(lex, indent, syms).or_fail(),
    Some(')') => layout_end(indent, syms).or_fail(),
    _ => close_layout_in_list(lex, indent, syms),
  }
}

/// The entry point: pre-whitespace checks, then the main dispatch.
pub fn scan_all(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  crate::trace!("scan_all: col={} eof={}", lex.column(), lex.eof());
  init(lex, indent, syms).or_else(|| scan_main(lex, indent, syms))
}

/// Run `scan_all` and report the outcome the way the host expects: `true`
/// with `result_symbol` set on a match, `false` otherwise.
pub fn eval(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> bool {
  match scan_all(lex, indent, syms) {
    ScanResult::Finish(sym) => {
      lex.set_result_symbol(sym);
      crate::trace!("result: {sym:?}");
      true
    }
    _ => false,
  }
}
