//! The virtual symbols this scanner can emit, and the view the generated
//! parser uses to tell us which of them would be valid right now.

/// A token this scanner may hand back to the generated parser.
///
/// Order matters: `after_error` below walks `Semicolon..=Empty` inclusive,
/// mirroring the C source's `for (int i = 0; i <= EMPTY; i++)` loop. `Fail`
/// is deliberately excluded from that range — it is an internal sentinel,
/// never requested by the parser and never emitted to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Symbol {
  Semicolon = 0,
  Start,
  End,
  Dot,
  Where,
  Varsym,
  Comment,
  Fold,
  Comma,
  In,
  Indent,
  Empty,
  Fail,
}

/// Number of entries in `Symbol`, including the `Fail` sentinel.
pub const SYMBOL_COUNT: usize = Symbol::Fail as usize + 1;

/// Borrowed view of the parser-supplied `valid_symbols` array.
///
/// The generated parser indexes this by symbol id to say which virtual
/// tokens would be acceptable at the current parse state.
#[derive(Clone, Copy)]
pub struct Symbols<'a> {
  valid: &'a [bool],
}

impl<'a> Symbols<'a> {
  /// `valid` must have at least `SYMBOL_COUNT` entries.
  pub fn new(valid: &'a [bool]) -> Self {
    debug_assert!(valid.len() >= SYMBOL_COUNT);
    Self { valid }
  }

  pub fn is_valid(&self, sym: Symbol) -> bool {
    self.valid[sym as usize]
  }

  /// True when the parser has requested every symbol from `Semicolon`
  /// through `Empty` inclusive, which is how it signals that it just
  /// recovered from a parse error and is giving the external scanner a
  /// last chance before falling back to the generated lexer.
  pub fn after_error(&self) -> bool {
    (Symbol::Semicolon as usize..=Symbol::Empty as usize).all(|i| self.valid[i])
  }
}
