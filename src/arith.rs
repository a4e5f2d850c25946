use serde::{Deserialize, Serialize};

use crate::ffi;

/// Integer arithmetic over 32-bit two's complement.
///
/// Overflow wraps in every implementation.
pub trait Arithmetic {
    fn add(&self, x: i32, y: i32) -> i32;
    fn sub(&self, x: i32, y: i32) -> i32;
}

/// Forwards each call across the FFI boundary to `libmath`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMath;

impl Arithmetic for NativeMath {
    fn add(&self, x: i32, y: i32) -> i32 {
        tracing::debug!(x, y, "calling native add");
        // SAFETY: `add` takes and returns plain integers and has no side effects.
        unsafe { ffi::add(x, y) }
    }

    fn sub(&self, x: i32, y: i32) -> i32 {
        tracing::debug!(x, y, "calling native sub");
        // SAFETY: `sub` takes and returns plain integers and has no side effects.
        unsafe { ffi::sub(x, y) }
    }
}

/// Pure Rust implementation with the same wrapping semantics as `NativeMath`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustMath;

impl Arithmetic for RustMath {
    fn add(&self, x: i32, y: i32) -> i32 {
        x.wrapping_add(y)
    }

    fn sub(&self, x: i32, y: i32) -> i32 {
        x.wrapping_sub(y)
    }
}

/// Returns `x + y` computed by the native library.
pub fn add(x: i32, y: i32) -> i32 {
    NativeMath.add(x, y)
}

/// Returns `x - y` computed by the native library.
pub fn sub(x: i32, y: i32) -> i32 {
    NativeMath.sub(x, y)
}

/// A binary operation exported by the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
}

impl Op {
    /// The infix operator used when printing.
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
        }
    }

    /// Evaluates `x op y` on the given backend.
    pub fn apply<A>(&self, backend: &A, x: i32, y: i32) -> i32
    where
        A: Arithmetic + ?Sized, {
        match self {
            Op::Add => backend.add(x, y),
            Op::Sub => backend.sub(x, y),
        }
    }
}
