//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components around the core: the memory bus,
//! RAM, and the memory-mapped devices of the I/O page.

/// Memory-mapped I/O device implementations.
pub mod devices;

/// Memory bus with registered reads and RAM/I/O routing.
pub mod interconnect;

/// Word-addressed RAM.
pub mod memory;

/// Device trait definitions for MMIO access.
pub mod traits;

pub use interconnect::{BusTransaction, MemoryBus};
