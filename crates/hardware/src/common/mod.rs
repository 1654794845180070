//! Common utilities and types used throughout the SoC simulator.
//!
//! This module provides the building blocks shared by the core, the bus, and the simulator:
//! 1. **Constants:** Word size, register count, and reset values.
//! 2. **Error Handling:** Construction-time errors for configuration and memory images.
//! 3. **Register Management:** The 32-entry integer register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and image loading.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGS, RESET_INSTRUCTION, RESET_PC, WORD_BYTES};
pub use error::{ConfigError, ImageError, SocError};
pub use reg::RegisterFile;
