//! Control FSM transition function.
//!
//! This module is the combinational half of the core. It performs:
//! 1. **Sequencing:** Chooses the next FSM state from the current one and the decoded class.
//! 2. **Bus Requests:** Drives the single memory port for fetch, load and store.
//! 3. **Effects:** Lists every register/PC/latch update the tick commits.
//!
//! Nothing here mutates state. [`transition`] observes only pre-tick values,
//! and the caller applies the returned [`Effect`]s at the tick boundary.

use crate::common::RegisterFile;
use crate::core::cpu::state::State;
use crate::core::units::alu::Alu;
use crate::core::units::bru::BranchUnit;
use crate::core::units::lsu::Lsu;
use crate::core::units::pcu::PcUnit;
use crate::isa::instruction::{Decoded, InstructionClass};
use crate::soc::interconnect::BusTransaction;

/// Pre-tick values the transition function reads.
#[derive(Clone, Copy, Debug)]
pub struct CycleInputs<'a> {
    /// Program counter.
    pub pc: u32,
    /// Decode of the latched instruction register.
    pub decoded: &'a Decoded,
    /// Latched first source operand.
    pub rs1: u32,
    /// Latched second source operand.
    pub rs2: u32,
    /// Register file contents.
    pub regs: &'a RegisterFile,
    /// Registered bus read data from the previous tick.
    pub rdata: u32,
}

/// A single clocked update, applied at the tick boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Load the instruction register.
    LatchInstr(u32),
    /// Load both operand latches.
    LatchOperands {
        /// Value of `regs[rs1]`.
        rs1: u32,
        /// Value of `regs[rs2]`.
        rs2: u32,
    },
    /// Update the program counter.
    SetPc(u32),
    /// Write a general-purpose register; writes to x0 are discarded on commit.
    WriteReg {
        /// Destination register index.
        rd: usize,
        /// Value written.
        value: u32,
    },
}

/// Summary of an instruction passing through EXECUTE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub raw: u32,
    /// Decoded class, `None` for undecodable opcodes.
    pub class: Option<InstructionClass>,
    /// Branch unit decision (meaningful only for branches).
    pub taken: bool,
}

/// Output of one evaluation of the control FSM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the tick.
    pub next: State,
    /// Request presented to the memory bus during the tick.
    pub bus: BusTransaction,
    /// Updates committed at the end of the tick.
    pub effects: Vec<Effect>,
    /// Set when the tick executes an instruction.
    pub retired: Option<Retired>,
}

impl Transition {
    fn to(next: State) -> Self {
        Self {
            next,
            bus: BusTransaction::idle(),
            effects: Vec::new(),
            retired: None,
        }
    }

    fn with_bus(mut self, bus: BusTransaction) -> Self {
        self.bus = bus;
        self
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Evaluates the control FSM for one tick.
///
/// # Arguments
///
/// * `state` - The current FSM state.
/// * `input` - Pre-tick values of the core and the registered bus data.
///
/// # Returns
///
/// The next state, the bus request for this tick, and the effects to commit.
pub fn transition(state: State, input: &CycleInputs<'_>) -> Transition {
    let d = input.decoded;
    match state {
        State::FetchInstr => {
            Transition::to(State::WaitInstr).with_bus(BusTransaction::read(input.pc))
        }
        State::WaitInstr => {
            Transition::to(State::FetchRegs).with_effect(Effect::LatchInstr(input.rdata))
        }
        State::FetchRegs => Transition::to(State::Execute).with_effect(Effect::LatchOperands {
            rs1: input.regs.read(d.rs1),
            rs2: input.regs.read(d.rs2),
        }),
        State::Execute => execute(input),
        State::Load => {
            let addr = Lsu::effective_address(d, input.rs1);
            Transition::to(State::WaitData).with_bus(BusTransaction::read(addr))
        }
        State::WaitData => {
            let addr = Lsu::effective_address(d, input.rs1);
            Transition::to(State::FetchInstr).with_effect(Effect::WriteReg {
                rd: d.rd,
                value: Lsu::load(input.rdata, addr, d.funct3),
            })
        }
        State::Store => {
            let addr = Lsu::effective_address(d, input.rs1);
            let lanes = Lsu::store(input.rs2, addr, d.funct3);
            Transition::to(State::FetchInstr).with_bus(BusTransaction::write(
                addr,
                lanes.data,
                lanes.mask,
            ))
        }
    }
}

/// EXECUTE: PC update, write-back, and the memory detour decision.
fn execute(input: &CycleInputs<'_>) -> Transition {
    let d = input.decoded;
    let taken = BranchUnit::evaluate(d.funct3, input.rs1, input.rs2);

    let next = if d.is_load() {
        State::Load
    } else if d.is_store() {
        State::Store
    } else {
        State::FetchInstr
    };
    let mut t = Transition::to(next);

    if !d.is_system() {
        t.effects
            .push(Effect::SetPc(PcUnit::next(input.pc, d, input.rs1, taken)));
    }
    if let Some(value) = write_back_value(input) {
        t.effects.push(Effect::WriteReg { rd: d.rd, value });
    }

    t.retired = Some(Retired {
        pc: input.pc,
        raw: d.raw,
        class: d.class,
        taken: d.is_branch() && taken,
    });
    t
}

/// Selects the EXECUTE write-back value, or `None` when the class writes nothing.
fn write_back_value(input: &CycleInputs<'_>) -> Option<u32> {
    let d = input.decoded;
    match d.class? {
        InstructionClass::AluReg | InstructionClass::AluImm => {
            Some(Alu::compute(d, input.rs1, input.rs2))
        }
        InstructionClass::Lui => Some(d.imm.u),
        InstructionClass::Auipc => Some(input.pc.wrapping_add(d.imm.u)),
        InstructionClass::Jal | InstructionClass::Jalr => Some(PcUnit::link(input.pc)),
        InstructionClass::Branch
        | InstructionClass::Load
        | InstructionClass::Store
        | InstructionClass::System => None,
    }
}
