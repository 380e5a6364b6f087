//! External scanner for a Unison-like, layout-sensitive grammar.
//!
//! Tree-sitter's generated parser handles everything that can be expressed
//! as a context-free grammar; it hands control to this scanner only for the
//! handful of decisions that depend on *position* rather than the token
//! stream alone — the off-side rule (virtual block start/end/semicolon
//! tokens) and a few keywords and punctuation marks whose meaning depends on
//! whether they close an implicit layout.
//!
//! The crate is organized bottom-up: [`classify`] and [`cursor`] are
//! character-level primitives, [`recognize`] builds token-shaped matchers on
//! top of those, [`layout`] and [`disambiguate`] are the scanner's actual
//! rules, and [`scan`] wires the rules into the dispatch pipeline the host
//! calls on every invocation. [`ffi`] is the only module aware that any of
//! this is reachable from C.

pub mod classify;
pub mod cursor;
pub mod disambiguate;
pub mod ffi;
pub mod indent;
pub mod layout;
pub mod recognize;
pub mod result;
pub mod scan;
pub mod symbol;

/// Debug tracing, gated behind the `trace` feature. Mirrors the C source's
/// `#ifdef DEBUG` / `DEBUG_PRINTF` pattern, without leaving `eprintln!` calls
/// compiled into ordinary release builds.
#[macro_export]
macro_rules! trace {
  ($($arg:tt)*) => {
    #[cfg(feature = "trace")]
    {
      eprintln!("[scanner] {}", format!($($arg)*));
    }
  };
}
