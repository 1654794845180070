//! Configuration system for the SoC simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (clock, baud rate, RAM, I/O page).
//! 2. **Structures:** Hierarchical config for general, system, and memory settings.
//! 3. **Validation:** Checks that a configuration describes a buildable SoC.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden in a JSON configuration document.
mod defaults {
    /// Core clock frequency in Hz (12 MHz board oscillator).
    pub const CLOCK_HZ: u64 = 12_000_000;

    /// Serial transmitter baud rate.
    pub const BAUD_RATE: u64 = 1_000_000;

    /// RAM size in 32-bit words (6 KiB).
    pub const RAM_WORDS: usize = 1536;

    /// Address bit that selects the I/O page (0x0040_0000).
    pub const IO_SELECT_BIT: u32 = 22;

    /// Upper bound on ticks for a single `Simulator::run` call.
    pub const TICK_LIMIT: u64 = 50_000_000;
}

/// Lowest legal I/O select bit; bits 0-1 are the byte offset within a word.
const MIN_IO_SELECT_BIT: u32 = 2;

/// Highest legal I/O select bit.
const MAX_IO_SELECT_BIT: u32 = 31;

/// Root configuration structure.
///
/// Every field has a default, so any subset of the document may be given.
///
/// # Examples
///
/// ```
/// use rvsoc_core::config::Config;
///
/// let json = r#"{
///     "system": { "clock_hz": 48000000, "baud_rate": 115200 },
///     "memory": { "ram_words": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.system.clock_hz, 48_000_000);
/// assert_eq!(config.memory.ram_words, 4096);
/// assert_eq!(config.memory.io_select_bit, 22);
/// assert_eq!(config.uart_divider().unwrap(), 416);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Clock and serial parameters
    #[serde(default)]
    pub system: SystemConfig,
    /// RAM size and address map
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text. Missing sections and fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or [`ConfigError::Parse`] on malformed input.
    /// The result is not validated; see [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that the configuration describes a buildable SoC.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let _ = self.uart_divider()?;

        if self.memory.ram_words == 0 {
            return Err(ConfigError::EmptyRam);
        }

        let bit = self.memory.io_select_bit;
        if !(MIN_IO_SELECT_BIT..=MAX_IO_SELECT_BIT).contains(&bit) {
            return Err(ConfigError::IoSelectBitOutOfRange(bit));
        }

        let ram_bytes = self.memory.ram_words as u64 * 4;
        let io_base = 1u64 << bit;
        if ram_bytes > io_base {
            return Err(ConfigError::RamOverlapsIo { ram_bytes, io_base });
        }

        Ok(())
    }

    /// Returns the UART tick divider, `floor(clock_hz / baud_rate)`.
    ///
    /// # Returns
    ///
    /// The number of core ticks per serial bit, which is always at least 1.
    pub fn uart_divider(&self) -> Result<u32, ConfigError> {
        let SystemConfig { clock_hz, baud_rate } = self.system;
        if baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        if baud_rate > clock_hz {
            return Err(ConfigError::BaudRateAboveClock { clock_hz, baud_rate });
        }
        let divider = clock_hz / baud_rate;
        u32::try_from(divider).map_err(|_| ConfigError::DividerTooLarge(divider))
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Maximum ticks `Simulator::run` waits for the halt condition
    #[serde(default = "GeneralConfig::default_tick_limit")]
    pub tick_limit: u64,
}

impl GeneralConfig {
    /// Returns the default tick limit.
    fn default_tick_limit() -> u64 {
        defaults::TICK_LIMIT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_limit: defaults::TICK_LIMIT,
        }
    }
}

/// Clock and serial transmitter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SystemConfig {
    /// Core clock frequency in Hz
    #[serde(default = "SystemConfig::default_clock_hz")]
    pub clock_hz: u64,

    /// UART baud rate in bits per second
    #[serde(default = "SystemConfig::default_baud_rate")]
    pub baud_rate: u64,
}

impl SystemConfig {
    fn default_clock_hz() -> u64 {
        defaults::CLOCK_HZ
    }

    fn default_baud_rate() -> u64 {
        defaults::BAUD_RATE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            clock_hz: defaults::CLOCK_HZ,
            baud_rate: defaults::BAUD_RATE,
        }
    }
}

/// RAM size and address-space split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// RAM size in 32-bit words
    #[serde(default = "MemoryConfig::default_ram_words")]
    pub ram_words: usize,

    /// Address bit routing accesses to the I/O page when set
    #[serde(default = "MemoryConfig::default_io_select_bit")]
    pub io_select_bit: u32,
}

impl MemoryConfig {
    fn default_ram_words() -> usize {
        defaults::RAM_WORDS
    }

    fn default_io_select_bit() -> u32 {
        defaults::IO_SELECT_BIT
    }

    /// Returns the lowest address of the I/O page.
    pub fn io_base(&self) -> u32 {
        1u32 << self.io_select_bit
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_words: defaults::RAM_WORDS,
            io_select_bit: defaults::IO_SELECT_BIT,
        }
    }
}
