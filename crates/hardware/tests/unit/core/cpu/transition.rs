//! Control FSM Transition Tests.
//!
//! Drives `transition()` directly with hand-built inputs and checks the next
//! state, the bus request and the effect list for each FSM state.

use pretty_assertions::assert_eq;
use rvsoc_core::common::RegisterFile;
use rvsoc_core::core::cpu::{CycleInputs, Effect, Retired, State, Transition};
use rvsoc_core::core::cpu::transition::transition;
use rvsoc_core::isa::decode::decode;
use rvsoc_core::isa::instruction::{Decoded, InstructionClass};
use rvsoc_core::soc::BusTransaction;

use crate::common::builder::instruction::inst;

fn inputs<'a>(pc: u32, decoded: &'a Decoded, regs: &'a RegisterFile) -> CycleInputs<'a> {
    CycleInputs {
        pc,
        decoded,
        rs1: 0,
        rs2: 0,
        regs,
        rdata: 0,
    }
}

// ══════════════════════════════════════════════════════════
// Fetch sequence
// ══════════════════════════════════════════════════════════

#[test]
fn test_fetch_instr_issues_read_at_pc() {
    let regs = RegisterFile::new();
    let d = decode(0x33);
    let t = transition(State::FetchInstr, &inputs(0x40, &d, &regs));
    assert_eq!(
        t,
        Transition {
            next: State::WaitInstr,
            bus: BusTransaction::read(0x40),
            effects: vec![],
            retired: None,
        }
    );
}

#[test]
fn test_wait_instr_latches_read_data() {
    let regs = RegisterFile::new();
    let d = decode(0x33);
    let mut input = inputs(0, &d, &regs);
    input.rdata = 0x1234_5678;
    let t = transition(State::WaitInstr, &input);
    assert_eq!(t.next, State::FetchRegs);
    assert_eq!(t.bus, BusTransaction::idle());
    assert_eq!(t.effects, vec![Effect::LatchInstr(0x1234_5678)]);
}

#[test]
fn test_fetch_regs_latches_both_operands() {
    let mut regs = RegisterFile::new();
    regs.write(3, 30);
    regs.write(4, 40);
    let d = decode(inst().add(1, 3, 4).build());
    let t = transition(State::FetchRegs, &inputs(0, &d, &regs));
    assert_eq!(t.next, State::Execute);
    assert_eq!(t.effects, vec![Effect::LatchOperands { rs1: 30, rs2: 40 }]);
}

#[test]
fn test_fetch_regs_reads_rs2_field_for_immediate_forms() {
    // rs2 bits of an I-type are immediate bits; the latch still reads them.
    let mut regs = RegisterFile::new();
    regs.write(5, 0xAA);
    let d = decode(inst().addi(1, 0, 5).build());
    let t = transition(State::FetchRegs, &inputs(0, &d, &regs));
    assert_eq!(t.effects, vec![Effect::LatchOperands { rs1: 0, rs2: 0xAA }]);
}

// ══════════════════════════════════════════════════════════
// EXECUTE
// ══════════════════════════════════════════════════════════

#[test]
fn test_execute_alu_writes_back_and_advances() {
    let regs = RegisterFile::new();
    let d = decode(inst().add(7, 1, 2).build());
    let mut input = inputs(0x10, &d, &regs);
    input.rs1 = 5;
    input.rs2 = 6;
    let t = transition(State::Execute, &input);
    assert_eq!(t.next, State::FetchInstr);
    assert_eq!(t.bus, BusTransaction::idle());
    assert_eq!(
        t.effects,
        vec![Effect::SetPc(0x14), Effect::WriteReg { rd: 7, value: 11 }]
    );
    assert_eq!(
        t.retired,
        Some(Retired {
            pc: 0x10,
            raw: d.raw,
            class: Some(InstructionClass::AluReg),
            taken: false,
        })
    );
}

#[test]
fn test_execute_lui_and_auipc() {
    let regs = RegisterFile::new();
    let lui = decode(inst().lui(3, 0x12345).build());
    let t = transition(State::Execute, &inputs(0x20, &lui, &regs));
    assert_eq!(t.effects[1], Effect::WriteReg { rd: 3, value: 0x1234_5000 });

    let auipc = decode(inst().auipc(3, 0x1).build());
    let t = transition(State::Execute, &inputs(0x20, &auipc, &regs));
    assert_eq!(t.effects[1], Effect::WriteReg { rd: 3, value: 0x1020 });
}

#[test]
fn test_execute_jal_links_and_jumps() {
    let regs = RegisterFile::new();
    let d = decode(inst().jal(1, -16).build());
    let t = transition(State::Execute, &inputs(0x40, &d, &regs));
    assert_eq!(
        t.effects,
        vec![Effect::SetPc(0x30), Effect::WriteReg { rd: 1, value: 0x44 }]
    );
}

#[test]
fn test_execute_jalr_uses_latched_rs1() {
    let regs = RegisterFile::new();
    let d = decode(inst().jalr(1, 2, 1).build());
    let mut input = inputs(0x40, &d, &regs);
    input.rs1 = 0x100;
    let t = transition(State::Execute, &input);
    assert_eq!(
        t.effects,
        vec![Effect::SetPc(0x100), Effect::WriteReg { rd: 1, value: 0x44 }]
    );
}

#[test]
fn test_execute_branch_taken_and_not_taken() {
    let regs = RegisterFile::new();
    let d = decode(inst().bne(1, 2, 12).build());

    let mut input = inputs(0x8, &d, &regs);
    input.rs1 = 1;
    let t = transition(State::Execute, &input);
    assert_eq!(t.effects, vec![Effect::SetPc(0x14)]);
    assert!(t.retired.is_some_and(|r| r.taken));

    input.rs1 = 0;
    let t = transition(State::Execute, &input);
    assert_eq!(t.effects, vec![Effect::SetPc(0xC)]);
    assert!(t.retired.is_some_and(|r| !r.taken));
}

#[test]
fn test_execute_load_and_store_detour() {
    let regs = RegisterFile::new();
    let lw = decode(inst().lw(1, 2, 0).build());
    let t = transition(State::Execute, &inputs(0, &lw, &regs));
    assert_eq!(t.next, State::Load);
    assert_eq!(t.effects, vec![Effect::SetPc(4)]);

    let sw = decode(inst().sw(2, 1, 0).build());
    let t = transition(State::Execute, &inputs(0, &sw, &regs));
    assert_eq!(t.next, State::Store);
    assert_eq!(t.effects, vec![Effect::SetPc(4)]);
}

#[test]
fn test_execute_system_holds_pc() {
    let regs = RegisterFile::new();
    let d = decode(inst().ebreak().build());
    let t = transition(State::Execute, &inputs(0x20, &d, &regs));
    assert_eq!(t.next, State::FetchInstr);
    assert!(t.effects.is_empty());
}

#[test]
fn test_execute_undecodable_only_advances_pc() {
    let regs = RegisterFile::new();
    let d = decode(0x0000_000F);
    let t = transition(State::Execute, &inputs(0x20, &d, &regs));
    assert_eq!(t.next, State::FetchInstr);
    assert_eq!(t.effects, vec![Effect::SetPc(0x24)]);
    assert_eq!(t.retired.map(|r| r.class), Some(None));
}

// ══════════════════════════════════════════════════════════
// Memory detour
// ══════════════════════════════════════════════════════════

#[test]
fn test_load_issues_read_at_effective_address() {
    let regs = RegisterFile::new();
    let d = decode(inst().lw(1, 2, 8).build());
    let mut input = inputs(0, &d, &regs);
    input.rs1 = 0x100;
    let t = transition(State::Load, &input);
    assert_eq!(t.next, State::WaitData);
    assert_eq!(t.bus, BusTransaction::read(0x108));
}

#[test]
fn test_wait_data_writes_extracted_value() {
    let regs = RegisterFile::new();
    let d = decode(inst().lb(9, 2, 3).build());
    let mut input = inputs(0, &d, &regs);
    input.rdata = 0x8000_0000;
    let t = transition(State::WaitData, &input);
    assert_eq!(t.next, State::FetchInstr);
    assert_eq!(t.bus, BusTransaction::idle());
    assert_eq!(t.effects, vec![Effect::WriteReg { rd: 9, value: 0xFFFF_FF80 }]);
}

#[test]
fn test_store_issues_masked_write() {
    let regs = RegisterFile::new();
    let d = decode(inst().sb(2, 3, 1).build());
    let mut input = inputs(0, &d, &regs);
    input.rs1 = 0x100;
    input.rs2 = 0x0000_00AB;
    let t = transition(State::Store, &input);
    assert_eq!(t.next, State::FetchInstr);
    assert!(t.bus.write && !t.bus.read);
    assert_eq!(t.bus.addr, 0x101);
    assert_eq!(t.bus.write_mask, 0b0010);
    assert_eq!((t.bus.write_data >> 8) & 0xFF, 0xAB);
    assert!(t.effects.is_empty());
}

#[test]
fn test_only_fetch_load_and_store_touch_the_bus() {
    let regs = RegisterFile::new();
    let d = decode(inst().sw(0, 0, 0).build());
    for state in State::ALL {
        let t = transition(state, &inputs(0, &d, &regs));
        let active = t.bus.read || t.bus.write;
        let expected = matches!(state, State::FetchInstr | State::Load | State::Store);
        assert_eq!(active, expected, "{state}");
    }
}
