//! Layout primitives: the operations that open and close implicit blocks.
//!
//! None of these call `mark_end`: virtual tokens (layout starts/ends,
//! semicolons) rely on the default mark set at the top of `scan_main`,
//! since they never consume any characters of their own.

use crate::indent::IndentStack;
use crate::result::ScanResult;
use crate::symbol::{Symbol, Symbols};

/// Open a new layout at `column`, if `Start` is requested.
pub fn layout_start(indent: &mut IndentStack, syms: Symbols, column: u16) -> ScanResult {
  if syms.is_valid(Symbol::Start) {
    indent.push(column);
    ScanResult::Finish(Symbol::Start)
  } else {
    ScanResult::Continue
  }
}

/// Close the innermost layout, if `End` is requested.
pub fn layout_end(indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  if syms.is_valid(Symbol::End) {
    indent.pop();
    ScanResult::Finish(Symbol::End)
  } else {
    ScanResult::Continue
  }
}

/// Try `layout_end`; if that doesn't fire, try a plain `Semicolon`.
pub fn end_or_semicolon(indent: &mut IndentStack, syms: Symbols) -> ScanResult {
  layout_end(indent, syms).or_else(|| ScanResult::finish_if(syms.is_valid(Symbol::Semicolon), Symbol::Semicolon))
}

/// End the current layout if the next line's indent is strictly smaller
/// than the enclosing layout's column.
pub fn dedent(indent: &mut IndentStack, syms: Symbols, next_indent: u32) -> ScanResult {
  match indent.top() {
    Some(top) if u32::from(top) > next_indent => layout_end(indent, syms),
    _ => ScanResult::Continue,
  }
}

/// Emit a `Semicolon` if the next line's indent matches the enclosing
/// layout's column exactly — the ordinary "next statement in this block"
/// case.
pub fn newline_semicolon(indent: &IndentStack, syms: Symbols, next_indent: u32) -> ScanResult {
  match indent.top() {
    Some(top) if syms.is_valid(Symbol::Semicolon) && u32::from(top) == next_indent => {
      ScanResult::Finish(Symbol::Semicolon)
    }
    _ => ScanResult::Continue,
  }
}

/// After a layout end has advanced past a dedent, the layout that used to
/// contain it may itself need a semicolon — e.g. nested `do` blocks where
/// ending the inner one lands exactly on the outer one's indent.
pub fn post_end_semicolon(indent: &IndentStack, syms: Symbols, column: u32) -> ScanResult {
  match indent.top() {
    Some(top) if syms.is_valid(Symbol::Semicolon) && column <= u32::from(top) => {
      ScanResult::Finish(Symbol::Semicolon)
    }
    _ => ScanResult::Continue,
  }
}

/// Like `post_end_semicolon`, but for repeated layout ends: tree-sitter
/// reinvokes the scanner after each `End`, so this keeps closing layouts one
/// at a time until the column is no longer smaller than the stack top.
pub fn repeat_end(indent: &mut IndentStack, syms: Symbols, column: u32) -> ScanResult {
  match indent.top() {
    Some(top) if syms.is_valid(Symbol::End) && column < u32::from(top) => layout_end(indent, syms),
    _ => ScanResult::Continue,
  }
}
