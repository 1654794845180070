//! LED output register.
//!
//! A write-only latch: any store selecting the register captures the full
//! 32-bit write data, and the value is visible to the host on the next tick.

use crate::soc::traits::Device;

/// Select bit of the LED register (byte offset 0x04 in the I/O page).
pub const LED_SELECT: u32 = 1 << 0;

/// LED output latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leds {
    value: u32,
}

impl Leds {
    /// Creates the latch with all LEDs off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the latched output value.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Device for Leds {
    fn name(&self) -> &str {
        "LEDS"
    }

    fn read(&self, _select: u32) -> u32 {
        0
    }

    fn write(&mut self, select: u32, data: u32) {
        if select & LED_SELECT == 0 {
            return;
        }
        if data != self.value {
            tracing::debug!(leds = format_args!("{data:#b}"), "LED output changed");
        }
        self.value = data;
    }
}
