//! Control signals and operation types.
//!
//! This module defines the signals that select what the execution units do. It performs:
//! 1. **Operation Classification:** Maps funct3/funct7 onto an ALU operation.
//! 2. **Memory Control:** Derives access widths and sign-extension requirements from funct3.

use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct3, funct7};

/// ALU operation types for integer instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Integer addition.
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

impl AluOp {
    /// Selects the operation from the function fields.
    ///
    /// # Arguments
    ///
    /// * `f3`       - The funct3 field.
    /// * `f7`       - The funct7 field; for immediate shifts this is `imm[11:5]`.
    /// * `register` - True for the register-register class. Subtraction is only
    ///   selected for register operands, so `ADDI` with a negative immediate adds.
    ///
    /// # Returns
    ///
    /// The ALU operation. Every funct3 value maps to some operation.
    pub fn from_funct(f3: u32, f7: u32, register: bool) -> Self {
        let alt = f7 & funct7::ALT_BIT != 0;
        match f3 & 0b111 {
            funct3::ADD_SUB if alt && register => Self::Sub,
            funct3::ADD_SUB => Self::Add,
            funct3::SLL => Self::Sll,
            funct3::SLT => Self::Slt,
            funct3::SLTU => Self::Sltu,
            funct3::XOR => Self::Xor,
            funct3::SRL_SRA if alt => Self::Sra,
            funct3::SRL_SRA => Self::Srl,
            funct3::OR => Self::Or,
            _ => Self::And,
        }
    }

    /// Selects the operation for a decoded ALU-class instruction.
    pub fn for_instruction(d: &Decoded) -> Self {
        Self::from_funct(d.funct3, d.funct7, d.is_alu_reg())
    }
}

/// Memory access width for loads and stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    #[default]
    Word,
}

impl MemWidth {
    /// Derives the access width from funct3 bits `[1:0]`.
    ///
    /// The encoding `0b11` has no RV32I meaning; it is treated as a full word.
    pub fn from_funct3(f3: u32) -> Self {
        match f3 & funct3::ACCESS_WIDTH_MASK {
            0b00 => Self::Byte,
            0b01 => Self::Half,
            _ => Self::Word,
        }
    }

    /// Returns the access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Returns true when funct3 selects a zero-extending load (LBU, LHU).
pub fn is_unsigned_load(f3: u32) -> bool {
    f3 & funct3::LOAD_UNSIGNED_BIT != 0
}
