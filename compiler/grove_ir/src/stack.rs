//! Stack growth for recursive parsing and evaluation.
//!
//! Arithmetic operands nest without limit (`+ ( + ( + ( ...`), and both the
//! parser and the evaluator recurse once per level. Native targets grow the
//! stack on demand through `stacker`; WASM calls straight through.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
