//! Character-class predicates shared by the recognizers and disambiguators.

/// Space, form-feed, newline, carriage return, tab, or vertical tab.
pub fn is_whitespace(c: char) -> bool {
  matches!(c, ' ' | '\u{000C}' | '\n' | '\r' | '\t' | '\u{000B}')
}

/// `\n`, `\r`, or form-feed: the characters that reset `count_indent`'s
/// running column count.
pub fn is_newline(c: char) -> bool {
  matches!(c, '\n' | '\r' | '\u{000C}')
}

/// A token like a `varsym` ends at whitespace, EOF (NUL), or a bracket.
pub fn is_token_terminator(c: Option<char>) -> bool {
  match c {
    None => true,
    Some(c) => is_whitespace(c) || matches!(c, '(' | ')' | '[' | ']'),
  }
}

/// Characters that make up a symbolic operator.
pub fn is_symbolic(c: char) -> bool {
  matches!(
    c,
    '!' | '#'
      | '$'
      | '%'
      | '&'
      | '*'
      | '+'
      | '.'
      | '/'
      | '<'
      | '>'
      | '?'
      | '^'
      | ':'
      | '='
      | '-'
      | '~'
      | '@'
      | '\\'
      | '|'
  )
}
