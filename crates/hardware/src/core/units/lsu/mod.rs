//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for shaping data
//! between the register file and the 32-bit memory bus. It includes:
//! - [`load`]: Byte/halfword selection and sign extension of read data.
//! - [`store`]: Byte-lane replication and write-mask generation.
//!
//! Any byte address is legal. The low address bits only pick byte lanes;
//! there is no misalignment trap.

/// Load data extraction.
pub mod load;

/// Store lane and mask generation.
pub mod store;

pub use self::store::StoreLanes;

use crate::isa::instruction::Decoded;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes the effective byte address of a load or store.
    ///
    /// # Arguments
    ///
    /// * `d`   - The decoded instruction.
    /// * `rs1` - Latched value of the base register.
    ///
    /// # Returns
    ///
    /// `rs1 + Simm` for stores and `rs1 + Iimm` for everything else.
    pub fn effective_address(d: &Decoded, rs1: u32) -> u32 {
        let offset = if d.is_store() { d.imm.s } else { d.imm.i };
        rs1.wrapping_add(offset)
    }

    /// Extracts load data from a bus word. See [`load::extract`].
    pub fn load(rdata: u32, addr: u32, f3: u32) -> u32 {
        load::extract(rdata, addr, f3)
    }

    /// Builds the store data and mask. See [`store::lanes`].
    pub fn store(rs2: u32, addr: u32, f3: u32) -> StoreLanes {
        store::lanes(rs2, addr, f3)
    }
}
