//! Build script for wine-table.
//!
//! Copies the wine dataset to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. The same file is served next to the
//! WASM bundle as `data/wines.json` for the network fallback.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src_path = "../fixtures/wines.json";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("wines.json");
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").expect("failed to write empty wines.json placeholder");
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }

    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
