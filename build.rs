//! Build script for life-panel: selects the linker memory layout per target.

use std::{env, fs, path::PathBuf};

fn main() {
    let target = env::var("TARGET").unwrap();
    let memory_x = if target.starts_with("thumbv8m") {
        "memory-pico2.x"
    } else if target.starts_with("riscv32imac") {
        "memory-pico2-riscv.x"
    } else if target.starts_with("thumbv6m") {
        "memory-pico1w.x"
    } else {
        // Host build (unit tests); no linker script involved.
        return;
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let contents =
        fs::read_to_string(memory_x).unwrap_or_else(|_| panic!("failed to read {memory_x}"));
    fs::write(out_dir.join("memory.x"), contents).expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={memory_x}");
}
