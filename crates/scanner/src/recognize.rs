//! Low-level recognizers: the character-level building blocks every
//! disambiguator and layout primitive is built from.

use crate::classify::{is_newline, is_token_terminator};
use crate::cursor::HostLexer;

/// Match `s` against the upcoming input, consuming each matched character.
///
/// On a mismatch, the characters already consumed are **not** rewound.
/// Callers must only call `seq` when consuming a failed prefix is
/// acceptable in context — e.g. `---` can't begin any other valid token, so
/// `fold` partially consuming it before giving up costs nothing.
pub fn seq(lex: &mut impl HostLexer, s: &str) -> bool {
  for expected in s.chars() {
    match lex.peek() {
      Some(c) if c == expected => lex.advance_capture(),
      _ => return false,
    }
  }
  true
}

/// `seq(s)` succeeds and the following character is a token terminator.
pub fn token(lex: &mut impl HostLexer, s: &str) -> bool {
  seq(lex, s) && is_token_terminator(lex.peek())
}

/// Advance past spaces and tabs only; newlines are left for `count_indent`.
pub fn skip_space(lex: &mut impl HostLexer) {
  while matches!(lex.peek(), Some(' ') | Some('\t')) {
    lex.advance_skip();
  }
}

/// Consume whitespace, counting indentation: spaces count 1, tabs count 8,
/// and any newline resets the count to 0. Stops at (and does not consume)
/// the first non-whitespace character, returning the final count — the
/// indentation of the first nonblank line reached.
pub fn count_indent(lex: &mut impl HostLexer) -> u32 {
  let mut indent = 0;
  loop {
    match lex.peek() {
      Some(c) if is_newline(c) => {
        lex.advance_skip();
        indent = 0;
      }
      Some(' ') => {
        lex.advance_skip();
        indent += 1;
      }
      Some('\t') => {
        lex.advance_skip();
        indent += 8;
      }
      _ => return indent,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cursor::StrLexer;

  #[test]
  fn seq_consumes_on_full_match() {
    let mut lex = StrLexer::new("wherefoo");
    assert!(seq(&mut lex, "where"));
    assert_eq!(lex.rest(), "foo");
  }

  #[test]
  fn seq_does_not_rewind_on_mismatch() {
    let mut lex = StrLexer::new("whxyz");
    assert!(!seq(&mut lex, "where"));
    // "wh" was consumed before the mismatch on "x" vs "e".
    assert_eq!(lex.rest(), "xyz");
  }

  #[test]
  fn token_requires_terminator_after_match() {
    let mut lex = StrLexer::new("in x");
    assert!(token(&mut lex, "in"));
    assert_eq!(lex.rest(), " x");
  }

  #[test]
  fn token_fails_when_not_followed_by_terminator() {
    let mut lex = StrLexer::new("index");
    assert!(!token(&mut lex, "in"));
  }

  #[test]
  fn token_succeeds_at_eof() {
    let mut lex = StrLexer::new("in");
    assert!(token(&mut lex, "in"));
  }

  #[test]
  fn skip_space_stops_before_newline() {
    let mut lex = StrLexer::new("  \tfoo");
    skip_space(&mut lex);
    assert_eq!(lex.rest(), "foo");

    let mut lex = StrLexer::new("  \nfoo");
    skip_space(&mut lex);
    assert_eq!(lex.rest(), "\nfoo");
  }

  #[test]
  fn count_indent_counts_spaces_and_tabs_and_resets_on_newline() {
    let mut lex = StrLexer::new("\n  \tx");
    let indent = count_indent(&mut lex);
    assert_eq!(indent, 2 + 8);
    assert_eq!(lex.rest(), "x");
  }

  #[test]
  fn count_indent_resets_on_every_newline_variant() {
    for nl in ["\n", "\r", "\u{000C}"] {
      let src = format!("  {nl}   x");
      let mut lex = StrLexer::new(&src);
      assert_eq!(count_indent(&mut lex), 3);
    }
  }
}
