//! System interconnect (bus) for memory and MMIO access.
//!
//! This module implements the single-port bus shared by instruction fetch and
//! data access. It provides:
//! 1. **Routing:** One address bit selects between RAM and the I/O page.
//! 2. **Registered Reads:** Read data appears exactly one tick after the request.
//! 3. **Masked Writes:** Byte-lane masks apply to RAM; I/O registers take the whole word.

use crate::common::constants::WORD_SHIFT;
use crate::common::error::ImageError;
use crate::soc::devices::IoPage;
use crate::soc::memory::Ram;

/// Per-tick request presented to the memory bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusTransaction {
    /// Byte address.
    pub addr: u32,
    /// Read enable.
    pub read: bool,
    /// Write enable.
    pub write: bool,
    /// Write data, already replicated into byte lanes.
    pub write_data: u32,
    /// Byte-lane write mask.
    pub write_mask: u8,
}

impl BusTransaction {
    /// No request.
    pub const fn idle() -> Self {
        Self {
            addr: 0,
            read: false,
            write: false,
            write_data: 0,
            write_mask: 0,
        }
    }

    /// Word read at `addr`.
    pub const fn read(addr: u32) -> Self {
        Self {
            addr,
            read: true,
            ..Self::idle()
        }
    }

    /// Masked write at `addr`.
    pub const fn write(addr: u32, data: u32, mask: u8) -> Self {
        Self {
            addr,
            write: true,
            write_data: data,
            write_mask: mask,
            ..Self::idle()
        }
    }
}

/// Memory bus connecting the core to RAM and the I/O page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryBus {
    /// Main memory.
    pub ram: Ram,
    /// Memory-mapped devices.
    pub io: IoPage,
    io_select: u32,
    rdata: u32,
}

impl MemoryBus {
    /// Creates a bus with the given RAM contents.
    ///
    /// # Arguments
    ///
    /// * `ram_words`     - RAM capacity in words.
    /// * `io_select_bit` - Address bit routing to the I/O page (2..=31).
    /// * `uart_divider`  - Core ticks per serial bit.
    /// * `image`         - Initial RAM contents.
    pub fn new(
        ram_words: usize,
        io_select_bit: u32,
        uart_divider: u32,
        image: &[u32],
    ) -> Result<Self, ImageError> {
        Ok(Self {
            ram: Ram::new(ram_words, image)?,
            io: IoPage::new(uart_divider),
            io_select: 1u32.wrapping_shl(io_select_bit),
            rdata: 0,
        })
    }

    /// Returns true if `addr` routes to the I/O page.
    pub fn is_io(&self, addr: u32) -> bool {
        addr & self.io_select != 0
    }

    /// Returns the registered read data from the previous tick.
    pub fn read_data(&self) -> u32 {
        self.rdata
    }

    /// Clocks the bus for one tick.
    ///
    /// The read is sampled before any write or device update of the same tick,
    /// so it observes pre-tick values. Read data keeps its last value on ticks
    /// without a read request.
    pub fn tick(&mut self, txn: &BusTransaction) {
        let io = self.is_io(txn.addr);
        let index = (txn.addr & !self.io_select) >> WORD_SHIFT;

        if txn.read {
            self.rdata = if io {
                self.io.read(index)
            } else {
                self.ram.read(index as usize)
            };
        }

        if txn.write {
            if io {
                self.io.write(index, txn.write_data);
            } else {
                self.ram.write(index as usize, txn.write_data, txn.write_mask);
            }
        }

        self.io.tick();
    }
}
