//! Simulation utilities and program loading.
//!
//! Provides memory-image loading and the tick-driven simulator that owns
//! the core and its memory bus.

/// Memory image parsing (hex text and raw little-endian binaries).
pub mod loader;

/// Tick-driven simulator and run loop.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
