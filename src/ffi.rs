// Raw bindings to the native library compiled by `build.rs`.
//
// `libmath` exports `add()` and `sub()` with the C calling convention.
// Only plain integers cross the boundary.

use std::os::raw::c_int;

unsafe extern "C" {
    // Returns the sum of two integers, wrapping on overflow.
    pub(crate) fn add(a: c_int, b: c_int) -> c_int;

    // Returns the difference of two integers, wrapping on overflow.
    pub(crate) fn sub(a: c_int, b: c_int) -> c_int;
}
