//! C ABI: the five `tree_sitter_<language>_external_scanner_*` entry points
//! a generated parser links against, plus the `TSLexer` shape they're
//! called with.
//!
//! Everything above this module is pure Rust operating through [`HostLexer`]
//! and ordinary owned types; this module's only job is translating between
//! that and the C calling convention, matching the signatures tree-sitter's
//! `src/parser.h` declares for an external scanner. `valid_symbols` is
//! indexed in the order the grammar's `externals` array lists them, which
//! must match [`Symbol`]'s declaration order exactly.

use std::ffi::c_void;
use std::os::raw::{c_char, c_uint};
use std::slice;

use crate::cursor::HostLexer;
use crate::indent::IndentStack;
use crate::scan::eval;
use crate::symbol::{Symbol, Symbols, SYMBOL_COUNT};

/// Upper bound tree-sitter imposes on a scanner's serialized state, shared
/// by every external scanner regardless of language.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Mirrors tree-sitter's `TSLexer`, the callback table the host passes to
/// `scan`. Field and function-pointer order must match the C definition
/// exactly since this struct is never constructed on the Rust side, only
/// received by reference from the host.
#[repr(C)]
pub struct RawLexer {
  /// The next code point, or a negative/invalid value at EOF depending on
  /// the host; `peek` treats anything `char::from_u32` rejects as EOF.
  pub lookahead: i32,
  /// Symbol id to report on a successful scan. `scan` writes this directly,
  /// matching how the real parser reads it back after `scan` returns.
  pub result_symbol: u16,
  pub advance: unsafe extern "C" fn(*mut RawLexer, bool),
  pub mark_end: unsafe extern "C" fn(*mut RawLexer),
  pub get_column: unsafe extern "C" fn(*mut RawLexer) -> u32,
  pub is_at_included_range_start: unsafe extern "C" fn(*const RawLexer) -> bool,
  pub eof: unsafe extern "C" fn(*const RawLexer) -> bool,
  pub log: Option<unsafe extern "C" fn(*const RawLexer, *const c_char)>,
}

impl HostLexer for RawLexer {
  fn peek(&self) -> Option<char> {
    char::from_u32(self.lookahead as u32)
  }

  fn advance_capture(&mut self) {
    unsafe { (self.advance)(self, false) }
  }

  fn advance_skip(&mut self) {
    unsafe { (self.advance)(self, true) }
  }

  fn column(&self) -> u32 {
    // The real `get_column` callback does not itself return 0 at EOF, so
    // this guard is required to satisfy `HostLexer::column`'s contract.
    if self.eof() {
      0
    } else {
      unsafe { (self.get_column)(self as *const RawLexer as *mut RawLexer) }
    }
  }

  fn eof(&self) -> bool {
    unsafe { (self.eof)(self) }
  }

  fn mark_end(&mut self) {
    unsafe { (self.mark_end)(self) }
  }

  fn set_result_symbol(&mut self, symbol: Symbol) {
    self.result_symbol = symbol as u16;
  }
}

/// Allocate the persistent state: one indent stack per parse tree, reused
/// across every `scan` call and every incremental reparse.
///
/// # Safety
/// Called by the host exactly once per parse tree. The returned pointer
/// must be passed back unmodified to every other entry point in this module
/// and freed exactly once via `destroy`.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_unison_external_scanner_create() -> *mut c_void {
  Box::into_raw(Box::new(IndentStack::new())) as *mut c_void
}

/// Free the state allocated by `create`.
///
/// # Safety
/// `payload` must be a pointer previously returned by `create` and not yet
/// passed to `destroy`.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_unison_external_scanner_destroy(payload: *mut c_void) {
  drop(Box::from_raw(payload as *mut IndentStack));
}

/// Run the scanner once. Returns whether a token was recognized; on success
/// `lexer->result_symbol` names it.
///
/// # Safety
/// `payload` must be a live pointer from `create`. `lexer` must be a valid,
/// non-null `TSLexer*` the host owns for the duration of this call.
/// `valid_symbols` must point to at least `SYMBOL_COUNT` bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_unison_external_scanner_scan(
  payload: *mut c_void,
  lexer: *mut RawLexer,
  valid_symbols: *const bool,
) -> bool {
  let indent = &mut *(payload as *mut IndentStack);
  let lexer = &mut *lexer;
  let valid = slice::from_raw_parts(valid_symbols, SYMBOL_COUNT);
  eval(lexer, indent, Symbols::new(valid))
}

/// Checkpoint the indent stack into `buffer`, returning the number of bytes
/// written (0 if it doesn't fit — the host then refuses the checkpoint and
/// reparses from scratch instead of from this point).
///
/// # Safety
/// `payload` must be a live pointer from `create`. `buffer` must point to at
/// least `SERIALIZATION_BUFFER_SIZE` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_unison_external_scanner_serialize(
  payload: *mut c_void,
  buffer: *mut c_char,
) -> c_uint {
  let indent = &*(payload as *const IndentStack);
  let buffer = slice::from_raw_parts_mut(buffer as *mut u8, SERIALIZATION_BUFFER_SIZE);
  indent.serialize(buffer)
}

/// Restore the indent stack from a checkpoint produced by `serialize`.
///
/// # Safety
/// `payload` must be a live pointer from `create`. `buffer` must point to at
/// least `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_unison_external_scanner_deserialize(
  payload: *mut c_void,
  buffer: *const c_char,
  length: c_uint,
) {
  let indent = &mut *(payload as *mut IndentStack);
  let buffer = slice::from_raw_parts(buffer as *const u8, length as usize);
  indent.deserialize(buffer);
}
