/// Build script that compiles the native arithmetic library
/// before the Rust crate is built.
///
/// `native/libmath.c` is compiled into a static archive (`libmath.a`)
/// placed in `OUT_DIR`. `cc` emits the link-search and link-lib
/// directives, so the `extern "C"` declarations in `src/ffi.rs`
/// resolve against it.
fn main() {
    cc::Build::new()
        .file("native/libmath.c")
        .include("native")
        .warnings(true)
        .compile("math");

    // Re-run this build script if the C source files change.
    println!("cargo::rerun-if-changed=native/libmath.c");
    println!("cargo::rerun-if-changed=native/libmath.h");
}
