//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`clock`]: Wall-clock time source used to stamp file records
//!
//! Records receive a clock instead of reading the system time directly, so
//! tests can drive creation and modification times deterministically.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;

pub use clock::{Clock, FixedClock, SharedClock, SteppingClock, SystemClock, system_clock};
