//! System-wide constants.
//!
//! Values that are fixed by the RV32I base ISA or by the SoC reset behaviour
//! and therefore not part of the runtime configuration.

/// Number of bytes in a bus word.
pub const WORD_BYTES: u32 = 4;

/// Shift converting a byte address into a word index.
pub const WORD_SHIFT: u32 = 2;

/// Number of integer registers (`x0`-`x31`).
pub const NUM_REGS: usize = 32;

/// Program counter value after reset.
pub const RESET_PC: u32 = 0;

/// Contents of the instruction register after reset: `ADD x0, x0, x0`.
pub const RESET_INSTRUCTION: u32 = 0x0000_0033;
