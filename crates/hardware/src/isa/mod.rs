//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! RV32I base integer instruction set.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all RV32I instruction formats.
pub mod decode;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (opcodes and function codes).
pub mod rv32i;
