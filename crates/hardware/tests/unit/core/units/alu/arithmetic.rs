//! ALU Arithmetic Operation Tests.
//!
//! Boundary values and wraparound for ADD and SUB, plus the rule that only
//! the register form can subtract.

use proptest::prelude::*;
use rvsoc_core::core::signals::AluOp;
use rvsoc_core::core::units::alu::Alu;
use rvsoc_core::isa::decode::decode;

use crate::common::builder::instruction::inst;

// ─── Constants ───────────────────────────────────────────────────────────────

const NEG1: u32 = u32::MAX;
const I32_MAX: u32 = i32::MAX as u32;
const I32_MIN: u32 = i32::MIN as u32;

// ═════════════════════════════════════════════════════════════════════════════
//  ADD
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_add_basic() {
    assert_eq!(Alu::execute(AluOp::Add, 2, 3), 5);
    assert_eq!(Alu::execute(AluOp::Add, 0, 0), 0);
}

#[test]
fn test_add_wraps_without_overflow_signal() {
    assert_eq!(Alu::execute(AluOp::Add, NEG1, 1), 0);
    assert_eq!(Alu::execute(AluOp::Add, I32_MAX, 1), I32_MIN);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SUB
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_sub_basic() {
    assert_eq!(Alu::execute(AluOp::Sub, 5, 3), 2);
    assert_eq!(Alu::execute(AluOp::Sub, 3, 5), (-2i32) as u32);
}

#[test]
fn test_sub_wraps() {
    assert_eq!(Alu::execute(AluOp::Sub, 0, 1), NEG1);
    assert_eq!(Alu::execute(AluOp::Sub, I32_MIN, 1), I32_MAX);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Instruction-level selection
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_compute_sub_register_form() {
    let d = decode(inst().sub(1, 2, 3).build());
    assert_eq!(Alu::compute(&d, 10, 4), 6);
}

#[test]
fn test_compute_addi_negative_immediate_adds() {
    // imm = -1024 sets imm[10], which lands on funct7 bit 5.
    let d = decode(inst().addi(1, 2, -1024).build());
    assert_eq!(d.funct7 & 0b0100000, 0b0100000);
    assert_eq!(Alu::compute(&d, 2000, 0xDEAD), 976);
}

#[test]
fn test_compute_addi_ignores_rs2_value() {
    let d = decode(inst().addi(1, 2, 7).build());
    assert_eq!(Alu::compute(&d, 1, 1000), 8);
}

proptest! {
    #[test]
    fn prop_add_sub_native(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(Alu::execute(AluOp::Add, a, b), a.wrapping_add(b));
        prop_assert_eq!(Alu::execute(AluOp::Sub, a, b), a.wrapping_sub(b));
        prop_assert_eq!(
            Alu::execute(AluOp::Sub, Alu::execute(AluOp::Add, a, b), b),
            a
        );
    }
}
