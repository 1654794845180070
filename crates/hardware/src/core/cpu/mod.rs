//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! architectural state of the multi-cycle core. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, and the instruction latch.
//! 2. **FSM Control:** Tracks the control state and the latched source operands.
//! 3. **Tick Phases:** Splits each tick into a pure evaluation and an atomic commit.

/// Tick evaluation and effect commit.
pub mod execution;

/// Control FSM state enumeration.
pub mod state;

/// Pure transition function of the control FSM.
pub mod transition;

pub use self::state::State;
pub use self::transition::{CycleInputs, Effect, Retired, Transition};

use crate::common::RegisterFile;
use crate::common::constants::{RESET_INSTRUCTION, RESET_PC};
use crate::isa::decode::decode;
use crate::isa::instruction::Decoded;

/// Architectural and control state of the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// General purpose registers.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u32,
    /// Instruction register.
    pub instr: u32,
    /// Decode of `instr`, kept in sync on every latch.
    pub decoded: Decoded,
    /// Latched value of `regs[rs1]`.
    pub rs1: u32,
    /// Latched value of `regs[rs2]`.
    pub rs2: u32,
    /// Control FSM state.
    pub state: State,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// PC is 0, all registers are 0, the FSM is in FETCH_INSTR and the
    /// instruction register holds a NOP.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: RESET_PC,
            instr: RESET_INSTRUCTION,
            decoded: decode(RESET_INSTRUCTION),
            rs1: 0,
            rs2: 0,
            state: State::FetchInstr,
        }
    }

    /// Returns true while the FSM sits in EXECUTE with a system instruction.
    ///
    /// A system instruction suppresses the PC update, so the core refetches
    /// it forever. Harnesses treat this as termination.
    pub fn is_halted(&self) -> bool {
        self.state == State::Execute && self.decoded.is_system()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
