//! Integer Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 general-purpose registers
//! of the RV32I core. It provides:
//! 1. **Storage:** An exclusively owned array of 32 words.
//! 2. **Invariant Enforcement:** Register `x0` reads as zero; writes to it are discarded.
//! 3. **Observability:** A debug dump of the complete register state with ABI names.

use super::constants::NUM_REGS;
use crate::isa::abi;

/// General-purpose register file.
///
/// Index 0 is not physically distinct storage: it is special-cased on read and write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are accepted and ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 registers, with `x0` reading as zero.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut regs = self.regs;
        regs[0] = 0;
        regs
    }

    /// Logs every register at debug level, four per line.
    pub fn dump(&self) {
        for base in (0..NUM_REGS).step_by(4) {
            tracing::debug!(
                "{:>4}={:#010x} {:>4}={:#010x} {:>4}={:#010x} {:>4}={:#010x}",
                abi::name(base),
                self.read(base),
                abi::name(base + 1),
                self.read(base + 1),
                abi::name(base + 2),
                self.read(base + 2),
                abi::name(base + 3),
                self.read(base + 3),
            );
        }
    }
}
