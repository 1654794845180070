//! Store lane and mask generation.
//!
//! The source register is replicated across the byte lanes so that the
//! addressed lane always carries its low byte (or halfword), and a 4-bit
//! mask selects which lanes the memory actually writes.

use crate::core::signals::MemWidth;

/// Write data and byte-lane mask for one store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreLanes {
    /// 32-bit write data with the value replicated into the addressed lanes.
    pub data: u32,
    /// Bit `n` set means byte lane `n` is written.
    pub mask: u8,
}

/// Builds the write data and mask for a store.
///
/// # Arguments
///
/// * `rs2`  - Value of the source register.
/// * `addr` - The effective byte address.
/// * `f3`   - The store funct3.
///
/// # Returns
///
/// The lane data and mask. A byte store selects one lane by `addr[1:0]`,
/// a halfword store selects lanes {0,1} or {2,3} by `addr[1]`, and every
/// other width writes all four lanes.
pub fn lanes(rs2: u32, addr: u32, f3: u32) -> StoreLanes {
    StoreLanes {
        data: replicate(rs2, addr),
        mask: mask(addr, MemWidth::from_funct3(f3)),
    }
}

/// Replicates the low byte/halfword of `rs2` into the lanes picked by `addr`.
fn replicate(rs2: u32, addr: u32) -> u32 {
    let a0 = addr & 0b01 != 0;
    let a1 = addr & 0b10 != 0;
    let b0 = rs2 & 0xFF;
    let b1 = (rs2 >> 8) & 0xFF;
    let b2 = (rs2 >> 16) & 0xFF;
    let b3 = (rs2 >> 24) & 0xFF;

    let lane1 = if a0 { b0 } else { b1 };
    let lane2 = if a1 { b0 } else { b2 };
    let lane3 = match (a0, a1) {
        (true, _) => b0,
        (false, true) => b1,
        (false, false) => b3,
    };

    b0 | (lane1 << 8) | (lane2 << 16) | (lane3 << 24)
}

/// Computes the 4-bit byte-lane write mask.
fn mask(addr: u32, width: MemWidth) -> u8 {
    match width {
        MemWidth::Byte => 1 << (addr & 0b11),
        MemWidth::Half if addr & 0b10 != 0 => 0b1100,
        MemWidth::Half => 0b0011,
        MemWidth::Word => 0b1111,
    }
}
