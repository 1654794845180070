//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the SoC simulator. It provides:
//! 1. **Ticks and CPI:** Total ticks, executed instructions, and ticks per instruction.
//! 2. **Instruction mix:** Counts by class (ALU, load, store, branch, jump, system).
//! 3. **Serial output:** Bytes accepted by the UART.

use std::fmt;

use crate::core::cpu::Retired;
use crate::isa::instruction::InstructionClass;

/// Simulation statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total ticks elapsed.
    pub ticks: u64,
    /// Instructions that passed through EXECUTE, including repeated halts.
    pub instructions: u64,

    /// Register-register and register-immediate ALU instructions.
    pub inst_alu: u64,
    /// Load instructions.
    pub inst_load: u64,
    /// Store instructions.
    pub inst_store: u64,
    /// Conditional branches that were taken.
    pub branch_taken: u64,
    /// Conditional branches that fell through.
    pub branch_not_taken: u64,
    /// JAL and JALR.
    pub inst_jump: u64,
    /// LUI and AUIPC.
    pub inst_upper: u64,
    /// System (halt) instructions.
    pub inst_system: u64,
    /// Words with no recognised opcode.
    pub inst_undecoded: u64,

    /// Bytes accepted by the serial transmitter.
    pub uart_bytes: u64,
}

impl SimStats {
    /// Records one instruction passing through EXECUTE.
    pub fn record(&mut self, retired: &Retired) {
        self.instructions += 1;
        match retired.class {
            Some(InstructionClass::AluReg | InstructionClass::AluImm) => self.inst_alu += 1,
            Some(InstructionClass::Load) => self.inst_load += 1,
            Some(InstructionClass::Store) => self.inst_store += 1,
            Some(InstructionClass::Branch) if retired.taken => self.branch_taken += 1,
            Some(InstructionClass::Branch) => self.branch_not_taken += 1,
            Some(InstructionClass::Jal | InstructionClass::Jalr) => self.inst_jump += 1,
            Some(InstructionClass::Lui | InstructionClass::Auipc) => self.inst_upper += 1,
            Some(InstructionClass::System) => self.inst_system += 1,
            None => self.inst_undecoded += 1,
        }
    }

    /// Returns average ticks per executed instruction, or 0 before the first one.
    pub fn cpi(&self) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            self.ticks as f64 / self.instructions as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u64| {
            if self.instructions == 0 {
                0.0
            } else {
                100.0 * n as f64 / self.instructions as f64
            }
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "RV32I SOC SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_ticks                {}", self.ticks)?;
        writeln!(f, "sim_insts                {}", self.instructions)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        let rows = [
            ("op_alu", self.inst_alu),
            ("op_load", self.inst_load),
            ("op_store", self.inst_store),
            ("op_branch_taken", self.branch_taken),
            ("op_branch_not_taken", self.branch_not_taken),
            ("op_jump", self.inst_jump),
            ("op_upper_imm", self.inst_upper),
            ("op_system", self.inst_system),
            ("op_undecoded", self.inst_undecoded),
        ];
        for (name, count) in rows {
            writeln!(f, "{name:<24} {count:<12} ({:>6.2}%)", pct(count))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        write!(f, "uart_bytes               {}", self.uart_bytes)
    }
}
