#![doc = include_str!("../README.md")]
//!
//! # Glossary
//!
//! - **Serpentine addressing:** physical wiring where the LED strip snakes
//!   back and forth, so every odd row runs right-to-left.
//! - **Toroidal wrap:** the grid's edges join the opposite edges, so neighbor
//!   counting at the border looks across to the far side.
//! - **[Diehard](https://conwaylife.com/wiki/Die_Hard):** a seven-cell
//!   pattern that churns for ~130 generations on an open board before dying
//!   out. Used as the reseed pattern because it keeps the panel lively.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(target_os = "none", not(any(feature = "pico1", feature = "pico2"))))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(target_os = "none", feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(target_os = "none", not(any(feature = "arm", feature = "riscv"))))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(target_os = "none", feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(target_os = "none", feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

mod error;
pub mod fade;
pub mod layout;
pub mod led_strip;
pub mod life;
// PIO interrupt bindings - used by led_strip's hardware driver
#[cfg(target_os = "none")]
#[doc(hidden)]
pub mod pio_irqs;
pub mod render;
pub mod schedule;
pub mod sim;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
