//! Windows SDL2 linking.
//!
//! `embedded-graphics-simulator` links against SDL2, which Windows has no
//! system copy of. Drop `SDL2.lib` and `SDL2.dll` into `vendor/sdl2/` at the
//! workspace root and this script points the linker there; on other
//! platforms the system SDL2 package is used and nothing happens here.

use std::env;
use std::path::PathBuf;

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let vendor = manifest_dir.parent().unwrap().join("vendor").join("sdl2");
    if vendor.exists() {
        println!("cargo:rustc-link-search=native={}", vendor.display());
    } else {
        println!(
            "cargo:warning=no SDL2 at {}; place SDL2.lib and SDL2.dll there",
            vendor.display()
        );
    }
    println!("cargo:rerun-if-changed={}", vendor.display());
}
