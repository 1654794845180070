//! Simulator: owns the CPU and the memory bus side-by-side.
//!
//! Each tick runs in two phases. The CPU evaluates its control FSM over
//! pre-tick state, the bus is clocked with the resulting request, and only
//! then are the CPU effects committed. Every clocked element therefore sees
//! the values from before the tick boundary.

use crate::common::error::SocError;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::MemoryBus;
use crate::soc::devices::UartTx;
use crate::stats::SimStats;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The core reached EXECUTE with a system instruction.
    Halted {
        /// Address of the halting instruction.
        pc: u32,
        /// Total ticks since reset.
        ticks: u64,
    },
    /// The tick budget ran out first.
    TickLimit,
}

/// Top-level simulator: CPU state plus memory bus and devices.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Core architectural and control state.
    pub cpu: Cpu,
    /// Memory bus, RAM and I/O page.
    pub bus: MemoryBus,
    /// Execution statistics.
    pub stats: SimStats,
    tick_limit: u64,
}

impl Simulator {
    /// Builds a simulator in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration; validated before use.
    /// * `image`  - Initial RAM contents, word 0 at address 0.
    ///
    /// # Returns
    ///
    /// The simulator, or the first configuration or image error.
    pub fn new(config: &Config, image: &[u32]) -> Result<Self, SocError> {
        config.validate()?;
        let divider = config.uart_divider()?;
        let bus = MemoryBus::new(
            config.memory.ram_words,
            config.memory.io_select_bit,
            divider,
            image,
        )?;

        tracing::info!(
            ram_words = config.memory.ram_words,
            io_base = format_args!("{:#010x}", config.memory.io_base()),
            uart_divider = divider,
            image_words = image.len(),
            "simulator ready"
        );

        Ok(Self {
            cpu: Cpu::new(),
            bus,
            stats: SimStats::default(),
            tick_limit: config.general.tick_limit,
        })
    }

    /// Advances the whole system by one tick.
    pub fn tick(&mut self) {
        let transition = self.cpu.evaluate(self.bus.read_data());
        let sent_before = self.bus.io.uart.output().len();

        self.bus.tick(&transition.bus);

        if let Some(retired) = &transition.retired {
            self.stats.record(retired);
        }
        self.stats.uart_bytes += (self.bus.io.uart.output().len() - sent_before) as u64;
        self.stats.ticks += 1;

        self.cpu.commit(transition);
    }

    /// Returns true while the core sits on a system instruction in EXECUTE.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Runs until halt or the configured tick limit.
    pub fn run(&mut self) -> RunOutcome {
        self.run_for(self.tick_limit)
    }

    /// Runs until halt or until `max_ticks` more ticks have elapsed.
    ///
    /// Returns immediately if the core is already halted.
    pub fn run_for(&mut self, max_ticks: u64) -> RunOutcome {
        for _ in 0..max_ticks {
            if self.is_halted() {
                return self.halted();
            }
            self.tick();
        }
        if self.is_halted() {
            return self.halted();
        }
        tracing::debug!(ticks = self.stats.ticks, "tick limit reached");
        RunOutcome::TickLimit
    }

    fn halted(&self) -> RunOutcome {
        tracing::debug!(
            pc = format_args!("{:#010x}", self.cpu.pc),
            ticks = self.stats.ticks,
            "halt detected"
        );
        self.cpu.regs.dump();
        RunOutcome::Halted {
            pc: self.cpu.pc,
            ticks: self.stats.ticks,
        }
    }

    /// Returns the LED output register.
    pub fn leds(&self) -> u32 {
        self.bus.io.leds.value()
    }

    /// Returns every byte the UART has accepted.
    pub fn uart_output(&self) -> &[u8] {
        self.bus.io.uart.output()
    }

    /// Returns the serial transmitter.
    pub fn uart_tx(&self) -> &UartTx {
        self.bus.io.uart.transmitter()
    }

    /// Reads a general-purpose register.
    pub fn reg(&self, idx: usize) -> u32 {
        self.cpu.regs.read(idx)
    }

    /// Returns the configured tick limit.
    pub fn tick_limit(&self) -> u64 {
        self.tick_limit
    }
}
