//! Tick Evaluation and Commit.
//!
//! This module splits a CPU tick into its two phases:
//! 1. **Evaluate:** Runs the pure transition function over the current state.
//! 2. **Commit:** Applies the resulting effects and advances the FSM.
//!
//! Between the two phases the caller presents the bus request to the memory bus.

use super::Cpu;
use super::state::State;
use super::transition::{self, CycleInputs, Effect, Transition};
use crate::isa::decode::decode;

impl Cpu {
    /// Evaluates the control FSM without modifying the CPU.
    ///
    /// # Arguments
    ///
    /// * `rdata` - Registered read data currently presented by the bus.
    ///
    /// # Returns
    ///
    /// The transition to commit at the end of this tick.
    pub fn evaluate(&self, rdata: u32) -> Transition {
        if self.state == State::Execute {
            tracing::trace!(
                pc = format_args!("{:#010x}", self.pc),
                inst = format_args!("{:#010x}", self.instr),
                "execute"
            );
        }

        let inputs = CycleInputs {
            pc: self.pc,
            decoded: &self.decoded,
            rs1: self.rs1,
            rs2: self.rs2,
            regs: &self.regs,
            rdata,
        };
        transition::transition(self.state, &inputs)
    }

    /// Applies a transition's effects and moves to its next state.
    pub fn commit(&mut self, transition: Transition) {
        for effect in transition.effects {
            match effect {
                Effect::LatchInstr(word) => {
                    self.instr = word;
                    self.decoded = decode(word);
                }
                Effect::LatchOperands { rs1, rs2 } => {
                    self.rs1 = rs1;
                    self.rs2 = rs2;
                }
                Effect::SetPc(pc) => self.pc = pc,
                Effect::WriteReg { rd, value } => self.regs.write(rd, value),
            }
        }
        self.state = transition.next;
    }
}
