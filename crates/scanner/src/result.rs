//! The three-valued control outcome every scanner rule returns.

use crate::symbol::Symbol;

/// Outcome of a single scanner rule.
///
/// This is the idiomatic stand-in for the C source's `Result { sym, finished
/// }` pair, where `finished == false` meant "try the next rule" and
/// `finished == true` meant either a successful `sym` or `FAIL`. Splitting
/// that into a proper three-way enum removes the need for the sentinel
/// `FAIL`-in-`sym` trick the C code used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanResult {
  /// No rule fired; try the next one in the pipeline.
  Continue,
  /// A symbol was detected and should be reported to the parser.
  Finish(Symbol),
  /// This position was positively rejected; stop without emitting anything.
  Fail,
}

impl ScanResult {
  pub fn is_continue(&self) -> bool {
    matches!(self, ScanResult::Continue)
  }

  /// Run `next` only if `self` is `Continue`; otherwise short-circuit.
  ///
  /// This is the direct replacement for the C source's `SHORT_SCANNER`
  /// macro (`if (res.finished) return res;`), expressed as a combinator
  /// instead of an early return, so call sites read as a pipeline:
  ///
  /// ```ignore
  /// eof(state).or_else(|| comment(state)).or_else(|| newline_token(indent, state))
  /// ```
  #[inline]
  pub fn or_else(self, next: impl FnOnce() -> ScanResult) -> ScanResult {
    match self {
      ScanResult::Continue => next(),
      finished => finished,
    }
  }

  /// `Finish(sym)` if `valid`, else `Continue`. Mirrors `finish_if_valid`.
  pub fn finish_if(valid: bool, sym: Symbol) -> ScanResult {
    if valid {
      ScanResult::Finish(sym)
    } else {
      ScanResult::Continue
    }
  }

  /// Turn an unfired `Continue` into a `Fail`.
  ///
  /// A few C-source rules only ever delegate to a sub-rule once they've
  /// already committed to a branch (e.g. `comment` after seeing `-` or `{`,
  /// `close_layout_in_list` after consuming a `,`): if the sub-rule doesn't
  /// finish, the position can't mean anything else, so it's a hard failure
  /// rather than "keep looking". This is the `SHORT_SCANNER; return
  /// res_fail;` idiom from the C source, named for what it does here.
  #[inline]
  pub fn or_fail(self) -> ScanResult {
    match self {
      ScanResult::Continue => ScanResult::Fail,
      finished => finished,
    }
  }
}
