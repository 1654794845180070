//! Error definitions.
//!
//! The simulated hardware itself never fails: every instruction word and every address has
//! a defined (possibly unspecified) outcome. Errors only arise while building a system:
//! 1. **Configuration:** Rejects parameters that cannot describe a working SoC.
//! 2. **Memory Images:** Reports malformed or oversized initial memory contents.
//! 3. **Aggregation:** `SocError` wraps both for callers that construct a full simulator.

use std::io;

/// Invalid simulator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a [`Config`](crate::config::Config).
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A baud rate of zero would need an infinite tick divider.
    #[error("UART baud rate must be non-zero")]
    ZeroBaudRate,

    /// The baud rate exceeds the core clock, giving a tick divider of zero.
    #[error("UART baud rate {baud_rate} exceeds clock frequency {clock_hz} Hz")]
    BaudRateAboveClock {
        /// Configured core clock frequency.
        clock_hz: u64,
        /// Configured baud rate.
        baud_rate: u64,
    },

    /// The tick divider does not fit the 32-bit baud counter.
    #[error("UART tick divider {0} does not fit in 32 bits")]
    DividerTooLarge(u64),

    /// RAM must hold at least one word.
    #[error("RAM size must be at least one word")]
    EmptyRam,

    /// The I/O select bit must lie above the word offset bits and inside the address.
    #[error("I/O select bit {0} is outside 2..=31")]
    IoSelectBitOutOfRange(u32),

    /// RAM would extend into the I/O half of the address space.
    #[error("RAM of {ram_bytes} bytes overlaps the I/O page at {io_base:#010x}")]
    RamOverlapsIo {
        /// RAM size in bytes.
        ram_bytes: u64,
        /// First address with the I/O select bit set.
        io_base: u64,
    },
}

/// Invalid initial memory image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The image file could not be read.
    #[error("failed to read memory image: {0}")]
    Io(#[from] io::Error),

    /// A line of a hex image is not a 32-bit hexadecimal word.
    #[error("line {line}: '{text}' is not a 32-bit hex word")]
    InvalidHexWord {
        /// 1-based line number.
        line: usize,
        /// Offending text after comment stripping.
        text: String,
    },

    /// A raw binary image must be a whole number of words.
    #[error("binary image length {0} is not a multiple of 4 bytes")]
    UnalignedLength(usize),

    /// The image does not fit into RAM.
    #[error("image of {words} words does not fit into {capacity}-word RAM")]
    TooLarge {
        /// Number of words in the image.
        words: usize,
        /// RAM capacity in words.
        capacity: usize,
    },
}

/// Top-level error returned when assembling a simulator.
#[derive(Debug, thiserror::Error)]
pub enum SocError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Memory image was rejected.
    #[error(transparent)]
    Image(#[from] ImageError),
}
