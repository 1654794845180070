//! Control FSM states.

use std::fmt;

/// State of the multi-cycle control FSM.
///
/// Each instruction walks FETCH_INSTR, WAIT_INSTR, FETCH_REGS and EXECUTE,
/// with a LOAD/WAIT_DATA or STORE detour for memory instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    /// Issue the instruction read at `pc`.
    #[default]
    FetchInstr,
    /// Latch the instruction word returned by the bus.
    WaitInstr,
    /// Latch both source register values.
    FetchRegs,
    /// Update the PC and perform register write-back.
    Execute,
    /// Issue the data read at the effective address.
    Load,
    /// Write the extracted load data to `rd`.
    WaitData,
    /// Issue the masked write at the effective address.
    Store,
}

impl State {
    /// Every state, in the order an instruction visits them.
    pub const ALL: [Self; 7] = [
        Self::FetchInstr,
        Self::WaitInstr,
        Self::FetchRegs,
        Self::Execute,
        Self::Load,
        Self::WaitData,
        Self::Store,
    ];

    /// Returns the conventional upper-case state name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FetchInstr => "FETCH_INSTR",
            Self::WaitInstr => "WAIT_INSTR",
            Self::FetchRegs => "FETCH_REGS",
            Self::Execute => "EXECUTE",
            Self::Load => "LOAD",
            Self::WaitData => "WAIT_DATA",
            Self::Store => "STORE",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
