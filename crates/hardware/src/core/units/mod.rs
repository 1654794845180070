//! Execution units and functional components.
//!
//! This module contains the combinational units the control FSM drives:
//! the ALU, the branch comparator, the next-PC selector, and the
//! load/store lane logic. All of them are pure functions of their inputs.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit (condition comparator).
pub mod bru;

/// Load/Store Unit for sub-word extraction and byte-lane writes.
pub mod lsu;

/// Program Counter Unit (next-PC and link value).
pub mod pcu;
