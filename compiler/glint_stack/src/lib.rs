//! Stack growth guard for deep recursion.
//!
//! Glint's grammar is prefix notation, so `+ + + ... 1 1` nests one level per
//! operator and the parser, evaluator and AST dump recurse once per level.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] moves the work
//! onto a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
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
