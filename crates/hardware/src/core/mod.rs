//! Core processor implementation.
//!
//! This module contains the multi-cycle CPU: its architectural state and
//! control FSM, the control signals derived from the decoded instruction,
//! and the combinational execution units the FSM drives.

/// CPU state, control FSM, and tick evaluation/commit.
pub mod cpu;

/// Control signals (ALU operation and memory width selection).
pub mod signals;

/// Execution units (ALU, branch comparator, next-PC, load/store lanes).
pub mod units;

pub use self::cpu::Cpu;
