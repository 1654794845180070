//! Memory-Mapped IO Devices.
//!
//! This module contains the devices found in the I/O page of the SoC and the
//! page itself. Inside the page the word address selects registers one-hot:
//!
//! | Byte offset | Select bit | Register |
//! |---|---|---|
//! | 0x04 | 0 | LED output (write-only) |
//! | 0x08 | 1 | UART data (write-only) |
//! | 0x10 | 2 | UART status (read-only, bit 9 = busy) |

/// LED output latch.
pub mod leds;

/// Serial transmitter and its register block.
pub mod uart;

pub use leds::Leds;
pub use uart::{Uart, UartTx};

pub use crate::soc::traits::Device;

/// The I/O half of the address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IoPage {
    /// LED output register.
    pub leds: Leds,
    /// Serial port.
    pub uart: Uart,
}

impl IoPage {
    /// Creates the page with LEDs off and an idle UART.
    ///
    /// # Arguments
    ///
    /// * `uart_divider` - Core ticks per serial bit.
    pub fn new(uart_divider: u32) -> Self {
        Self {
            leds: Leds::new(),
            uart: Uart::new(uart_divider),
        }
    }

    /// Reads the registers selected by the word offset `select`.
    pub fn read(&self, select: u32) -> u32 {
        self.devices().fold(0, |acc, dev| acc | dev.read(select))
    }

    /// Writes `data` to every register selected by `select`.
    pub fn write(&mut self, select: u32, data: u32) {
        self.leds.write(select, data);
        self.uart.write(select, data);
    }

    /// Advances every device by one tick.
    pub fn tick(&mut self) {
        self.leds.tick();
        self.uart.tick();
    }

    fn devices(&self) -> impl Iterator<Item = &dyn Device> {
        [&self.leds as &dyn Device, &self.uart as &dyn Device].into_iter()
    }
}
