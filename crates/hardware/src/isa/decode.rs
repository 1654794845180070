//! RV32I Instruction Decoder.
//!
//! Splits a 32-bit instruction word into its class, register indices, function
//! codes and all five immediate views. Decoding is purely combinational: every
//! immediate is produced for every word, and the consumer picks the one its
//! class needs.

use crate::isa::instruction::{Decoded, Immediates, InstructionBits, InstructionClass};

/// Total width of an instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for the I-Type immediate (bits 20-31).
const I_IMM_SHIFT: u32 = 20;

/// Mask for the U-Type immediate (bits 12-31, kept in place).
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Width of the S-Type immediate before extension.
const S_IMM_BITS: u32 = 12;

/// Width of the B-Type immediate before extension.
const B_IMM_BITS: u32 = 13;

/// Width of the J-Type immediate before extension.
const J_IMM_BITS: u32 = 21;

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure. Words whose opcode is not one of the ten RV32I major
/// opcodes carry `class: None`; their remaining fields are still extracted.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    Decoded {
        raw: inst,
        opcode,
        class: InstructionClass::from_opcode(opcode),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: immediates(inst),
    }
}

/// Computes all five immediate views of `inst`.
pub fn immediates(inst: u32) -> Immediates {
    Immediates {
        u: u_imm(inst),
        i: i_imm(inst),
        s: s_imm(inst),
        b: b_imm(inst),
        j: j_imm(inst),
    }
}

/// `imm[31:12] | rd | opcode`
fn u_imm(inst: u32) -> u32 {
    inst & U_IMM_MASK
}

/// `imm[11:0] | rs1 | funct3 | rd | opcode`
fn i_imm(inst: u32) -> u32 {
    ((inst as i32) >> I_IMM_SHIFT) as u32
}

/// `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
fn s_imm(inst: u32) -> u32 {
    let low = (inst >> 7) & 0x1F;
    let high = (inst >> 25) & 0x7F;
    sign_extend((high << 5) | low, S_IMM_BITS)
}

/// `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
fn b_imm(inst: u32) -> u32 {
    let bit_11 = (inst >> 7) & 0x1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bit_12 = (inst >> 31) & 0x1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
fn j_imm(inst: u32) -> u32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 0x1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = (inst >> 31) & 0x1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` of `val` to a full 32-bit word.
fn sign_extend(val: u32, bits: u32) -> u32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (((val << shift) as i32) >> shift) as u32
}
