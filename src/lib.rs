//! # mathbridge
//!
//! A Rust library for calling a native C arithmetic library over FFI.
//!
//! `build.rs` compiles `native/libmath.c` and links it statically. The
//! exported `add()` and `sub()` functions are reachable through the
//! [`Arithmetic`] trait, with a pure Rust backend alongside for comparison.
//!
//! ## Quick Start
//!
//! ```
//! use mathbridge::{add, sub};
//!
//! assert_eq!(add(5, 4), 9);
//! assert_eq!(sub(5, 4), 1);
//! ```
//!
//! ```
//! use mathbridge::{Calculation, NativeMath, Op};
//!
//! let calc = Calculation::run(&NativeMath, Op::Add, 5, 4);
//! assert_eq!(calc.to_string(), "5 + 4 = 9");
//! ```

pub mod arith;
pub mod cli;
mod ffi;
pub mod logger;
pub mod report;

pub use arith::{add, sub, Arithmetic, NativeMath, Op, RustMath};
pub use report::{render, Calculation, Format};
