//! Token disambiguators: rules that decide between a handful of candidate
//! readings for a character or keyword the generated parser can't tell
//! apart on its own.

use crate::classify::{is_newline, is_whitespace};
use crate::cursor::HostLexer;
use crate::indent::IndentStack;
use crate::layout::layout_end;
use crate::recognize::{seq, token};
use crate::result::ScanResult;
use crate::scan::eof;
use crate::symbol::{Symbol, Symbols};

/// A `.` that is neither preceded nor followed by whitespace may be a
/// qualified-name dot. The caller (`init`) only reaches this before any
/// whitespace has been skipped, which guarantees there is no preceding
/// whitespace; this checks the character that follows.
pub fn dot(lex: &mut impl HostLexer, syms: Symbols) -> ScanResult {
  if !syms.is_valid(Symbol::Dot) {
    return ScanResult::Continue;
  }
  if lex.peek() != Some('.') {
    return ScanResult::Continue;
  }
  lex.advance_capture();
  let followed_by_space = matches!(lex.peek(), Some(c) if is_whitespace(c));
  if syms.is_valid(Symbol::Varsym) && followed_by_space {
    // The dot was consumed "for nothing" here — it's reinterpreted as the
    // start of an operator like `(.)`, which the generated lexer handles.
    return ScanResult::Finish(Symbol::Varsym);
  }
  lex.mark_end();
  ScanResult::Finish(Symbol::Dot)
}

/// `---` followed by anything up to end of file is a fold marker: the rest
/// of the file is discarded.
pub fn fold(lex: &mut impl HostLexer) -> ScanResult {
  if !seq(lex, "---") {
    return ScanResult::Continue;
  }
  while !lex.eof() {
    lex.advance_capture();
  }
  lex.mark_end();
  ScanResult::Finish(Symbol::Fold)
}

/// Two or three dashes: an inline comment, or — if three dashes run to the
/// end of the line — a fold marker.
pub fn minus(lex: &mut impl HostLexer) -> ScanResult {
  if !seq(lex, "--") {
    return ScanResult::Continue;
  }
  if lex.peek() == Some('-') {
    lex.advance_capture();
    let at_line_end = lex.eof() || matches!(lex.peek(), Some(c) if is_newline(c));
    if at_line_end {
      while !lex.eof() {
        lex.advance_capture();
      }
      lex.mark_end();
      return ScanResult::Finish(Symbol::Fold);
    }
    return ScanResult::Fail;
  }
  inline_comment(lex)
}

/// Consume to end of line (or EOF) and emit `Comment`.
pub fn inline_comment(lex: &mut impl HostLexer) -> ScanResult {
  loop {
    match lex.peek() {
      None => break,
      Some(c) if is_newline(c) => break,
      _ => lex.advance_capture(),
    }
  }
  lex.mark_end();
  ScanResult::Finish(Symbol::Comment)
}

/// `{- ... -}`, nested arbitrarily deep. EOF inside an unterminated comment
/// delegates to the `eof` rule (which will fail unless a layout end or
/// semicolon can paper over it) rather than succeeding.
pub fn block_comment(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  let mut level: u32 = 0;
  loop {
    match lex.peek() {
      Some('{') => {
        lex.advance_capture();
        if lex.peek() == Some('-') {
          lex.advance_capture();
          level += 1;
        }
      }
      Some('-') => {
        lex.advance_capture();
        if lex.peek() == Some('}') {
          lex.advance_capture();
          if level == 0 {
            lex.mark_end();
            return ScanResult::Finish(Symbol::Comment);
          }
          level -= 1;
        }
      }
      None => return eof(lex, indent, syms),
      Some(_) => lex.advance_capture(),
    }
  }
}

/// `{-` opens a block comment; any other character after `{` is not this
/// scanner's concern (the generated lexer owns plain `{`).
pub fn brace(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  if lex.peek() != Some('{') {
    return ScanResult::Fail;
  }
  lex.advance_capture();
  if lex.peek() != Some('-') {
    return ScanResult::Fail;
  }
  lex.advance_capture();
  block_comment(lex, indent, syms)
}

/// Dispatch to `minus` or `brace` based on the lookahead character.
///
/// Once either branch is taken, it must finish: a `-` or `{` that doesn't
/// turn out to be a comment can't be anything else in this position, so an
/// unfired sub-rule becomes a hard `Fail` rather than `Continue`.
pub fn comment(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  match lex.peek() {
    Some('-') => minus(lex).or_fail(),
    Some('{') => brace(lex, indent, syms).or_fail(),
    _ => ScanResult::Continue,
  }
}

/// An inline `where`: either the real `Where` token, or — if `Where` isn't
/// valid here — the end of the layout it implicitly closes.
pub fn where_(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  if !token(lex, "where") {
    return ScanResult::Continue;
  }
  if syms.is_valid(Symbol::Where) {
    lex.mark_end();
    ScanResult::Finish(Symbol::Where)
  } else {
    layout_end(indent, syms)
  }
}

/// `in` ends the layout opened by the matching `let`.
pub fn in_(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  if syms.is_valid(Symbol::In) && token(lex, "in") {
    lex.mark_end();
    indent.pop();
    ScanResult::Finish(Symbol::In)
  } else {
    ScanResult::Continue
  }
}

/// `else` may end a layout opened in the body of a `then`.
pub fn else_(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  if token(lex, "else") {
    layout_end(indent, syms)
  } else {
    ScanResult::Continue
  }
}

/// `]` and `,` inside a bracketed layout (list literal, quasiquote, etc.)
/// both need scanner help: `]` to close the implicit layout a list element
/// opened, `,` to separate elements without closing it.
pub fn close_layout_in_list(lex: &mut impl HostLexer, indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  match lex.peek() {
    Some(']') => {
      if syms.is_valid(Symbol::End) {
        indent.pop();
        ScanResult::Finish(Symbol::End)
      } else {
        ScanResult::Continue
      }
    }
    Some(',') => {
      lex.advance_capture();
      if syms.is_valid(Symbol::Comma) {
        lex.mark_end();
        ScanResult::Finish(Symbol::Comma)
      } else {
        // The comma is already consumed here with no way back to offer it
        // as anything else; if the enclosing layout can't end either, this
        // position is a hard failure. Preserved deliberately rather than
        // adding a rewind this scanner has never needed elsewhere.
        layout_end(indent, syms).or_fail()
      }
    }
    _ => ScanResult::Continue,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cursor::StrLexer;

  fn valid(syms: &[Symbol]) -> Vec<bool> {
    let mut v = vec![false; crate::symbol::SYMBOL_COUNT];
    for s in syms {
      v[*s as usize] = true;
    }
    v
  }

  #[test]
  fn dot_emits_dot_before_non_whitespace() {
    let mut lex = StrLexer::new(".y");
    let raw = valid(&[Symbol::Dot, Symbol::Varsym]);
    assert_eq!(dot(&mut lex, Symbols::new(&raw)), ScanResult::Finish(Symbol::Dot));
    assert_eq!(lex.marked_text(), ".");
  }

  #[test]
  fn dot_emits_varsym_before_whitespace_when_requested() {
    let mut lex = StrLexer::new(". y");
    let raw = valid(&[Symbol::Dot, Symbol::Varsym]);
    assert_eq!(
      dot(&mut lex, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::Varsym)
    );
  }

  #[test]
  fn dot_continues_when_not_requested() {
    let mut lex = StrLexer::new(".y");
    let raw = valid(&[]);
    assert_eq!(dot(&mut lex, Symbols::new(&raw)), ScanResult::Continue);
  }

  #[test]
  fn fold_consumes_to_eof() {
    let mut lex = StrLexer::new("---\nanything");
    assert_eq!(fold(&mut lex), ScanResult::Finish(Symbol::Fold));
    assert!(lex.eof());
  }

  #[test]
  fn fold_continues_without_triple_dash() {
    let mut lex = StrLexer::new("--x");
    assert_eq!(fold(&mut lex), ScanResult::Continue);
  }

  #[test]
  fn minus_reads_inline_comment_on_two_dashes() {
    let mut lex = StrLexer::new("-- hi\nnext");
    assert_eq!(minus(&mut lex), ScanResult::Finish(Symbol::Comment));
    assert_eq!(lex.marked_text(), "-- hi");
  }

  #[test]
  fn minus_folds_on_trailing_triple_dash() {
    let mut lex = StrLexer::new("---\nrest");
    assert_eq!(minus(&mut lex), ScanResult::Finish(Symbol::Fold));
  }

  #[test]
  fn minus_fails_on_triple_dash_mid_line() {
    let mut lex = StrLexer::new("---x");
    assert_eq!(minus(&mut lex), ScanResult::Fail);
  }

  #[test]
  fn block_comment_consumes_nested_levels() {
    let mut lex = StrLexer::new("{- outer {- inner -} still outer -}rest");
    let mut indent = IndentStack::new();
    let raw = valid(&[]);
    lex.advance_capture();
    lex.advance_capture();
    let res = block_comment(&mut lex, &mut indent, Symbols::new(&raw));
    assert_eq!(res, ScanResult::Finish(Symbol::Comment));
    assert_eq!(lex.rest(), "rest");
  }

  #[test]
  fn block_comment_fails_when_unterminated_at_eof() {
    let mut lex = StrLexer::new("{- never closed");
    let mut indent = IndentStack::new();
    let raw = valid(&[]);
    lex.advance_capture();
    lex.advance_capture();
    assert_eq!(
      block_comment(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Fail
    );
  }

  #[test]
  fn comment_dispatches_on_dash_and_brace() {
    let mut indent = IndentStack::new();
    let raw = valid(&[]);

    let mut lex = StrLexer::new("-- hi");
    assert_eq!(
      comment(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::Comment)
    );

    let mut lex = StrLexer::new("{- hi -}");
    assert_eq!(
      comment(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::Comment)
    );

    let mut lex = StrLexer::new("+");
    assert_eq!(comment(&mut lex, &mut indent, Symbols::new(&raw)), ScanResult::Continue);
  }

  #[test]
  fn comment_fails_on_single_dash() {
    let mut lex = StrLexer::new("-x");
    let mut indent = IndentStack::new();
    let raw = valid(&[]);
    assert_eq!(comment(&mut lex, &mut indent, Symbols::new(&raw)), ScanResult::Fail);
  }

  #[test]
  fn where_emits_where_when_requested() {
    let mut lex = StrLexer::new("where x");
    let mut indent = IndentStack::new();
    let raw = valid(&[Symbol::Where]);
    assert_eq!(
      where_(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::Where)
    );
  }

  #[test]
  fn where_ends_layout_when_where_not_requested() {
    let mut lex = StrLexer::new("where x");
    let mut indent = IndentStack::new();
    indent.push(2);
    let raw = valid(&[Symbol::End]);
    assert_eq!(
      where_(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::End)
    );
  }

  #[test]
  fn in_pops_stack_and_emits_in() {
    let mut lex = StrLexer::new("in x");
    let mut indent = IndentStack::new();
    indent.push(4);
    let raw = valid(&[Symbol::In]);
    assert_eq!(in_(&mut lex, &mut indent, Symbols::new(&raw)), ScanResult::Finish(Symbol::In));
    assert!(indent.is_empty());
  }

  #[test]
  fn else_ends_layout() {
    let mut lex = StrLexer::new("else x");
    let mut indent = IndentStack::new();
    indent.push(2);
    let raw = valid(&[Symbol::End]);
    assert_eq!(
      else_(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::End)
    );
  }

  #[test]
  fn close_layout_in_list_closes_bracket() {
    let mut lex = StrLexer::new("]");
    let mut indent = IndentStack::new();
    indent.push(2);
    let raw = valid(&[Symbol::End]);
    assert_eq!(
      close_layout_in_list(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::End)
    );
  }

  #[test]
  fn close_layout_in_list_emits_comma_when_requested() {
    let mut lex = StrLexer::new(", next");
    let mut indent = IndentStack::new();
    let raw = valid(&[Symbol::Comma]);
    assert_eq!(
      close_layout_in_list(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::Comma)
    );
    assert_eq!(lex.rest(), " next");
  }

  #[test]
  fn close_layout_in_list_comma_falls_back_to_layout_end() {
    let mut lex = StrLexer::new(",next");
    let mut indent = IndentStack::new();
    indent.push(2);
    let raw = valid(&[Symbol::End]);
    assert_eq!(
      close_layout_in_list(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Finish(Symbol::End)
    );
    // The comma is consumed even though it wasn't emitted.
    assert_eq!(lex.rest(), "next");
  }

  #[test]
  fn close_layout_in_list_comma_fails_if_nothing_fires() {
    let mut lex = StrLexer::new(",next");
    let mut indent = IndentStack::new();
    let raw = valid(&[]);
    assert_eq!(
      close_layout_in_list(&mut lex, &mut indent, Symbols::new(&raw)),
      ScanResult::Fail
    );
  }
}
