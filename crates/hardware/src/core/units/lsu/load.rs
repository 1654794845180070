//! Load data extraction.
//!
//! The bus always returns the full aligned word. Address bit 1 picks the
//! halfword, bit 0 picks the byte within it, and funct3 decides the width
//! and whether to sign-extend.

use crate::core::signals::{MemWidth, is_unsigned_load};

/// Extracts the loaded value from a bus word.
///
/// # Arguments
///
/// * `rdata` - The aligned 32-bit word returned by the bus.
/// * `addr`  - The effective byte address.
/// * `f3`    - The load funct3.
///
/// # Returns
///
/// The value to write back. Word loads pass `rdata` through unchanged.
pub fn extract(rdata: u32, addr: u32, f3: u32) -> u32 {
    let half = (rdata >> ((addr & 0b10) * 8)) & 0xFFFF;
    let byte = (half >> ((addr & 0b01) * 8)) & 0xFF;
    let unsigned = is_unsigned_load(f3);

    match MemWidth::from_funct3(f3) {
        MemWidth::Byte if unsigned => byte,
        MemWidth::Byte => byte as u8 as i8 as i32 as u32,
        MemWidth::Half if unsigned => half,
        MemWidth::Half => half as u16 as i16 as i32 as u32,
        MemWidth::Word => rdata,
    }
}
