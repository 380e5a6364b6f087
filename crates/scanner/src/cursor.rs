//! Thin adapter over the host's lexer handle.
//!
//! `tree-sitter` hands the external scanner a `TSLexer*` with a handful of
//! callbacks: peek the next code point without consuming it, advance past
//! one code point (optionally keeping it out of the emitted token), read the
//! current column, check for EOF, and mark the current position as the end
//! of the token in progress. `HostLexer` is that contract, expressed as a
//! trait so the scanning logic in `recognize`, `layout`, `disambiguate`, and
//! `scan` can run against either the real FFI binding (`ffi::RawLexer`) or
//! an in-memory fake used by tests.
pub trait HostLexer {
  /// The next code point, or `None` at end of input.
  fn peek(&self) -> Option<char>;

  /// Consume one code point, including it in the token currently being
  /// scanned.
  fn advance_capture(&mut self);

  /// Consume one code point, excluding it from the token currently being
  /// scanned (used to skip whitespace).
  fn advance_skip(&mut self);

  /// Column of the current position, counting from 0. Always 0 at EOF.
  fn column(&self) -> u32;

  /// Whether the lexer is positioned at end of input.
  fn eof(&self) -> bool;

  /// Fix the current position as the end of the token in progress.
  fn mark_end(&mut self);

  /// Record the symbol to report back to the parser on success.
  fn set_result_symbol(&mut self, symbol: crate::symbol::Symbol);
}

/// In-memory `HostLexer` over a borrowed `&str`, used only by this crate's
/// own tests. Mirrors the five callbacks a real `TSLexer` would provide,
/// without needing a live tree-sitter runtime.
#[cfg(test)]
pub struct StrLexer<'a> {
  src: &'a str,
  bytes: std::str::CharIndices<'a>,
  pos: usize,
  column: u32,
  mark: usize,
  pub result_symbol: Option<crate::symbol::Symbol>,
}

#[cfg(test)]
impl<'a> StrLexer<'a> {
  pub fn new(src: &'a str) -> Self {
    Self {
      src,
      bytes: src.char_indices(),
      pos: 0,
      column: 0,
      mark: 0,
      result_symbol: None,
    }
  }

  /// The substring the scanner has marked as the end of the current token.
  pub fn marked_text(&self) -> &'a str {
    &self.src[..self.mark]
  }

  /// Remaining, unconsumed source.
  pub fn rest(&self) -> &'a str {
    &self.src[self.pos..]
  }
}

#[cfg(test)]
impl<'a> HostLexer for StrLexer<'a> {
  fn peek(&self) -> Option<char> {
    self.src[self.pos..].chars().next()
  }

  fn advance_capture(&mut self) {
    self.bump();
  }

  fn advance_skip(&mut self) {
    self.bump();
  }

  fn column(&self) -> u32 {
    if self.eof() {
      0
    } else {
      self.column
    }
  }

  fn eof(&self) -> bool {
    self.pos >= self.src.len()
  }

  fn mark_end(&mut self) {
    self.mark = self.pos;
  }

  fn set_result_symbol(&mut self, symbol: crate::symbol::Symbol) {
    self.result_symbol = Some(symbol);
  }
}

#[cfg(test)]
impl<'a> StrLexer<'a> {
  fn bump(&mut self) {
    if let Some(c) = self.peek() {
      self.pos += c.len_utf8();
      if c == '\n' {
        self.column = 0;
      } else {
        self.column += 1;
      }
    }
    // Keep `bytes` iterator pointer roughly in sync; unused beyond sanity.
    let _ = self.bytes.next();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn peek_advance_and_eof() {
    let mut lex = StrLexer::new("ab");
    assert_eq!(lex.peek(), Some('a'));
    assert!(!lex.eof());
    lex.advance_capture();
    assert_eq!(lex.peek(), Some('b'));
    lex.advance_capture();
    assert_eq!(lex.peek(), None);
    assert!(lex.eof());
  }

  #[test]
  fn column_resets_on_newline() {
    let mut lex = StrLexer::new("ab\ncd");
    for _ in 0..3 {
      lex.advance_capture();
    }
    assert_eq!(lex.column(), 0);
    lex.advance_capture();
    assert_eq!(lex.column(), 1);
  }

  #[test]
  fn mark_end_fixes_consumed_prefix() {
    let mut lex = StrLexer::new("abc");
    lex.advance_capture();
    lex.advance_capture();
    lex.mark_end();
    assert_eq!(lex.marked_text(), "ab");
    assert_eq!(lex.rest(), "c");
  }
}
