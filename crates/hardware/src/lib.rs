//! Multi-cycle RV32I system-on-chip simulator library.
//!
//! This crate implements a tick-accurate model of a small RV32I SoC with the following:
//! 1. **Core:** Multi-cycle control FSM, register file, ALU, branch and next-PC units, load/store lanes.
//! 2. **ISA:** Pure RV32I decoding of opcode class, register indices, function codes and immediates.
//! 3. **SoC:** Single-port memory bus with registered reads, RAM, LED register and a serial transmitter.
//! 4. **Simulation:** Memory image loading, configuration, run loop with halt detection, and statistics.

/// Common types and constants (register file, errors, reset values).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (control FSM, signals, execution units).
pub mod core;
/// Instruction set (decode, instruction fields, ABI names, RV32I encodings).
pub mod isa;
/// Memory image loading and the tick-driven simulator.
pub mod sim;
/// System-on-chip (memory bus, RAM, devices).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Core state type; holds registers, PC, instruction latch and FSM state.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
