//! Servo sweep and synchronized LED fade for the Pico W (and Pico 2).
//!
//! The firmware holds a hobby servo at three fixed positions, then sweeps it back and forth
//! forever while an LED on a second PWM channel fades up and down in step with the sweep.
//! The hardware-free pieces ([`sequence`], [`servo`], [`led`], [`sweep`], [`pwm_timing`])
//! also build on the host under the `host` feature.
//!
//! # Glossary
//!
//! - **PWM ([Pulse Width Modulation](https://en.wikipedia.org/wiki/Pulse-width_modulation)) Slices:** Both Pico 1 and 2 have 8 slices (& 16 channels). These "slices"
//!   are unrelated Rust slices.
//! - **Top / wrap:** the tick count at which a slice's counter resets. The period is `top + 1` ticks.
//! - **Divider:** the RP2040 8.4 fixed-point value that scales `clk_sys` down to the PWM tick rate.
#![cfg_attr(not(feature = "host"), no_std)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: an architecture must be selected (unless testing with host feature)
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature");

mod error;
pub mod led;
pub mod pwm_timing;
pub mod sequence;
pub mod servo;
pub mod sweep;
// These modules require embassy_rp and are excluded when testing on host
#[cfg(not(feature = "host"))]
pub mod pwm_channel;
#[cfg(not(feature = "host"))]
pub mod runner;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
