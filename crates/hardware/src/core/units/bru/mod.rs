//! Branch Resolution Unit (BRU).
//!
//! A pure comparator: given the two latched source operands and the branch
//! condition code, it decides whether a conditional branch is taken. There
//! is no prediction; the core resolves every branch in EXECUTE.

use crate::isa::rv32i::funct3;

/// Branch comparator.
#[derive(Debug)]
pub struct BranchUnit;

impl BranchUnit {
    /// Evaluates a branch condition.
    ///
    /// # Arguments
    ///
    /// * `f3`  - The funct3 condition code.
    /// * `rs1` - First source operand.
    /// * `rs2` - Second source operand.
    ///
    /// # Returns
    ///
    /// True if the branch is taken. The reserved codes `0b010` and `0b011`
    /// never take.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvsoc_core::core::units::bru::BranchUnit;
    ///
    /// assert!(BranchUnit::evaluate(0b110, 0x0000_0001, 0x8000_0000));
    /// assert!(!BranchUnit::evaluate(0b100, 0x0000_0001, 0x8000_0000));
    /// ```
    pub fn evaluate(f3: u32, rs1: u32, rs2: u32) -> bool {
        match f3 & 0b111 {
            funct3::BEQ => rs1 == rs2,
            funct3::BNE => rs1 != rs2,
            funct3::BLT => (rs1 as i32) < (rs2 as i32),
            funct3::BGE => (rs1 as i32) >= (rs2 as i32),
            funct3::BLTU => rs1 < rs2,
            funct3::BGEU => rs1 >= rs2,
            _ => false,
        }
    }
}
