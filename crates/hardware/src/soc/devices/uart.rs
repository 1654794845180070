//! Serial Transmitter (UART TX).
//!
//! Implements a transmit-only 8-N-1 serial port. It provides:
//! 1. **Shift Register:** `UartTx` serialises one byte per frame, LSB first.
//! 2. **Registers:** `Uart` exposes a data register and a status register in the I/O page.
//! 3. **Capture:** Every accepted byte is also appended to a host-visible log.

use crate::soc::traits::Device;

/// Select bit of the data register (byte offset 0x08 in the I/O page).
pub const UART_DATA_SELECT: u32 = 1 << 1;

/// Select bit of the status register (byte offset 0x10 in the I/O page).
pub const UART_STATUS_SELECT: u32 = 1 << 2;

/// Status register bit reporting "transmitter busy" (not ready).
pub const STATUS_BUSY_BIT: u32 = 9;

/// Bits per frame: start, 8 data, stop.
pub const FRAME_BITS: u32 = 10;

/// Stop bit position within the frame.
const STOP_BIT: u32 = FRAME_BITS - 1;

/// Transmit shift register and baud counter.
///
/// `divider` ticks make one bit period. After a byte is accepted the
/// transmitter stays busy for exactly `FRAME_BITS * divider` ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UartTx {
    divider: u32,
    counter: u32,
    shift: u16,
    ready: bool,
}

impl UartTx {
    /// Creates an idle transmitter.
    ///
    /// # Arguments
    ///
    /// * `divider` - Core ticks per serial bit, `floor(clock_hz / baud_rate)`.
    ///   Values below 1 are treated as 1.
    pub fn new(divider: u32) -> Self {
        Self {
            divider: divider.max(1),
            counter: 0,
            shift: 0,
            ready: true,
        }
    }

    /// Returns true when a new byte can be accepted.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Returns the serial line level. The line idles high.
    pub fn tx(&self) -> bool {
        self.shift & 1 == 1 || self.shift == 0
    }

    /// Returns the configured ticks per bit.
    pub fn divider(&self) -> u32 {
        self.divider
    }

    /// Advances the transmitter by one tick.
    ///
    /// # Arguments
    ///
    /// * `data` - The byte presented this tick, if `valid` is asserted.
    ///
    /// # Returns
    ///
    /// True if the byte was accepted. Bytes offered while busy are dropped.
    pub fn tick(&mut self, data: Option<u8>) -> bool {
        if self.ready {
            let Some(byte) = data else {
                return false;
            };
            self.shift = (1 << STOP_BIT) | (u16::from(byte) << 1);
            self.counter = self.divider;
            self.ready = false;
            return true;
        }

        self.counter -= 1;
        if self.counter == 0 {
            self.shift >>= 1;
            if self.shift == 0 {
                self.ready = true;
            } else {
                self.counter = self.divider;
            }
        }
        false
    }
}

/// UART register block with output capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uart {
    tx: UartTx,
    pending: Option<u8>,
    output: Vec<u8>,
}

impl Uart {
    /// Creates the register block around an idle transmitter.
    pub fn new(divider: u32) -> Self {
        Self {
            tx: UartTx::new(divider),
            pending: None,
            output: Vec::new(),
        }
    }

    /// Returns the transmitter.
    pub fn transmitter(&self) -> &UartTx {
        &self.tx
    }

    /// Returns every byte accepted so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Returns the status register value.
    pub fn status(&self) -> u32 {
        u32::from(!self.tx.ready()) << STATUS_BUSY_BIT
    }
}

impl Device for Uart {
    fn name(&self) -> &str {
        "UART0"
    }

    fn read(&self, select: u32) -> u32 {
        if select & UART_STATUS_SELECT != 0 {
            self.status()
        } else {
            0
        }
    }

    fn write(&mut self, select: u32, data: u32) {
        if select & UART_DATA_SELECT != 0 {
            self.pending = Some(data as u8);
        }
    }

    fn tick(&mut self) {
        let data = self.pending.take();
        if self.tx.tick(data) {
            if let Some(byte) = data {
                tracing::debug!(byte = format_args!("{:?}", char::from(byte)), "UART accepted byte");
                self.output.push(byte);
            }
        }
    }
}
