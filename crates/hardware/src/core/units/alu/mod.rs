//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the EXECUTE state.
//! It handles standard arithmetic, logical operations, and shifts on
//! 32-bit operands with two's-complement wraparound.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::signals::AluOp;
use crate::isa::instruction::Decoded;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements the RV32I register-register and register-immediate
/// operations. Overflow is never signalled.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand; for shifts only the low 5 bits are used
    ///
    /// # Returns
    ///
    /// The 32-bit result of the ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvsoc_core::core::signals::AluOp;
    /// use rvsoc_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 36), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, -5_i32 as u32, 10), 0);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }

    /// Computes the result of an ALU-class instruction.
    ///
    /// Operand 2 is `rs2` for the register class and the I-immediate otherwise.
    pub fn compute(d: &Decoded, rs1: u32, rs2: u32) -> u32 {
        let b = if d.is_alu_reg() { rs2 } else { d.imm.i };
        Self::execute(AluOp::for_instruction(d), rs1, b)
    }
}
