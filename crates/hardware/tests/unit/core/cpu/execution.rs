//! CPU Evaluate/Commit Tests.
//!
//! Reset state, commit semantics and the halt predicate.

use rvsoc_core::core::Cpu;
use rvsoc_core::core::cpu::{Effect, State, Transition};
use rvsoc_core::isa::decode::decode;
use rvsoc_core::soc::BusTransaction;

use crate::common::builder::instruction::inst;

fn with_effects(next: State, effects: Vec<Effect>) -> Transition {
    Transition {
        next,
        bus: BusTransaction::idle(),
        effects,
        retired: None,
    }
}

#[test]
fn test_reset_state() {
    let cpu = Cpu::new();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.state, State::FetchInstr);
    assert_eq!(cpu.instr, 0x33);
    assert!(cpu.decoded.is_alu_reg());
    assert_eq!(cpu.regs.snapshot(), [0; 32]);
    assert_eq!(Cpu::default(), cpu);
}

#[test]
fn test_evaluate_does_not_mutate() {
    let cpu = Cpu::new();
    let before = cpu.clone();
    let _ = cpu.evaluate(0xDEAD_BEEF);
    assert_eq!(cpu, before);
}

#[test]
fn test_commit_latch_instr_redecodes() {
    let mut cpu = Cpu::new();
    let word = inst().lw(4, 5, 16).build();
    cpu.commit(with_effects(State::FetchRegs, vec![Effect::LatchInstr(word)]));
    assert_eq!(cpu.instr, word);
    assert_eq!(cpu.decoded, decode(word));
    assert_eq!(cpu.state, State::FetchRegs);
}

#[test]
fn test_commit_applies_all_effects() {
    let mut cpu = Cpu::new();
    cpu.commit(with_effects(
        State::FetchInstr,
        vec![
            Effect::LatchOperands { rs1: 1, rs2: 2 },
            Effect::SetPc(0x80),
            Effect::WriteReg { rd: 10, value: 99 },
        ],
    ));
    assert_eq!((cpu.rs1, cpu.rs2), (1, 2));
    assert_eq!(cpu.pc, 0x80);
    assert_eq!(cpu.regs.read(10), 99);
}

#[test]
fn test_commit_discards_x0_write() {
    let mut cpu = Cpu::new();
    cpu.commit(with_effects(
        State::FetchInstr,
        vec![Effect::WriteReg { rd: 0, value: 0xFFFF }],
    ));
    assert_eq!(cpu.regs.read(0), 0);
}

#[test]
fn test_is_halted_only_in_execute_with_system() {
    let mut cpu = Cpu::new();
    let ebreak = inst().ebreak().build();
    cpu.commit(with_effects(State::FetchRegs, vec![Effect::LatchInstr(ebreak)]));
    assert!(!cpu.is_halted());

    cpu.commit(with_effects(State::Execute, vec![]));
    assert!(cpu.is_halted());

    cpu.commit(with_effects(State::FetchInstr, vec![]));
    assert!(!cpu.is_halted());
}

#[test]
fn test_nop_in_execute_is_not_halt() {
    let mut cpu = Cpu::new();
    cpu.commit(with_effects(State::Execute, vec![]));
    assert!(!cpu.is_halted());
}

#[test]
fn test_state_names() {
    let names: Vec<String> = State::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        [
            "FETCH_INSTR",
            "WAIT_INSTR",
            "FETCH_REGS",
            "EXECUTE",
            "LOAD",
            "WAIT_DATA",
            "STORE"
        ]
    );
    assert_eq!(State::default(), State::FetchInstr);
}
