//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait implemented by every register block
//! in the I/O page. It provides:
//! 1. **Identification:** `name` for logging.
//! 2. **Access:** Word read/write, addressed by the one-hot register select bits.
//! 3. **Lifecycle:** Optional `tick` for devices with internal timing.

/// Trait for register blocks attached to the I/O page.
///
/// Register selection is one-hot: `select` is the word offset inside the page,
/// and a device responds to every register whose select bit is set. Devices
/// not addressed by `select` must return 0 and ignore writes.
pub trait Device {
    /// Returns a short name for this device (e.g., `"UART0"`, `"LEDS"`).
    fn name(&self) -> &str;

    /// Reads the registers addressed by `select`.
    fn read(&self, select: u32) -> u32;

    /// Writes `data` to the registers addressed by `select`.
    fn write(&mut self, select: u32, data: u32);

    /// Advances device state by one tick.
    fn tick(&mut self) {}
}
