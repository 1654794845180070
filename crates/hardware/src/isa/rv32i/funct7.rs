//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) of R-type instructions. Only bit 5 is
//! significant to the core: it selects SUB over ADD and SRA over SRL.

/// Default encoding (ADD, SRL, and all other R-type operations).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding (SUB, SRA).
pub const ALT: u32 = 0b0100000;

/// Mask of the alternate-operation bit within `funct7`.
pub const ALT_BIT: u32 = 0b0100000;
