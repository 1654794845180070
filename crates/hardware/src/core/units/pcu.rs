//! Program Counter Unit (PCU).
//!
//! Computes the next program counter candidate for the instruction in
//! EXECUTE, and the link value written back by jumps.

use crate::common::constants::WORD_BYTES;
use crate::isa::instruction::Decoded;

/// Mask clearing bit 0 of a JALR target.
pub const JALR_ALIGNMENT_MASK: u32 = !1;

/// Next-PC selector.
#[derive(Debug)]
pub struct PcUnit;

impl PcUnit {
    /// Selects the next program counter.
    ///
    /// Priority is taken branch, then JAL, then JALR, then sequential.
    ///
    /// # Arguments
    ///
    /// * `pc`    - Address of the instruction in EXECUTE.
    /// * `d`     - The decoded instruction.
    /// * `rs1`   - Latched value of the first source register.
    /// * `taken` - Branch unit decision for this instruction.
    ///
    /// # Returns
    ///
    /// The address of the next instruction to fetch.
    pub fn next(pc: u32, d: &Decoded, rs1: u32, taken: bool) -> u32 {
        if d.is_branch() && taken {
            pc.wrapping_add(d.imm.b)
        } else if d.is_jal() {
            pc.wrapping_add(d.imm.j)
        } else if d.is_jalr() {
            rs1.wrapping_add(d.imm.i) & JALR_ALIGNMENT_MASK
        } else {
            Self::link(pc)
        }
    }

    /// Returns the sequential successor `pc + 4`, the JAL/JALR link value.
    pub fn link(pc: u32) -> u32 {
        pc.wrapping_add(WORD_BYTES)
    }
}
