use rvsoc_core::Simulator;
use rvsoc_core::config::Config;
use rvsoc_core::core::Cpu;
use rvsoc_core::core::cpu::State;
use rvsoc_core::sim::RunOutcome;
use tracing_subscriber::EnvFilter;

/// Tick budget for test programs; far above anything the tests need.
pub const TEST_TICK_LIMIT: u64 = 200_000;

/// Installs a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Returns the default configuration with the test tick limit.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.general.tick_limit = TEST_TICK_LIMIT;
    config
}

/// Simulator wrapper used by program-level tests.
#[derive(Debug)]
pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Builds a simulator with the default configuration and `program` at address 0.
    pub fn new(program: &[u32]) -> Self {
        Self::with_config(&test_config(), program)
    }

    pub fn with_config(config: &Config, program: &[u32]) -> Self {
        init_tracing();
        let sim = Simulator::new(config, program).expect("test simulator must build");
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.reg(reg)
    }

    pub fn state(&self) -> State {
        self.sim.cpu.state
    }

    pub fn tick(&mut self) {
        self.sim.tick();
    }

    /// Advances `n` ticks unconditionally.
    pub fn tick_n(&mut self, n: usize) {
        for _ in 0..n {
            self.sim.tick();
        }
    }

    /// Ticks until the FSM enters `state`, returning the number of ticks taken.
    pub fn tick_until(&mut self, state: State) -> u64 {
        let mut ticks = 0;
        while self.sim.cpu.state != state {
            assert!(ticks < TEST_TICK_LIMIT, "FSM never reached {state}");
            self.sim.tick();
            ticks += 1;
        }
        ticks
    }

    /// Runs to the halt condition and returns the halting PC.
    pub fn run_to_halt(&mut self) -> u32 {
        match self.sim.run() {
            RunOutcome::Halted { pc, .. } => pc,
            RunOutcome::TickLimit => panic!(
                "program did not halt within {TEST_TICK_LIMIT} ticks (pc = {:#010x})",
                self.sim.cpu.pc
            ),
        }
    }

    /// Reads a RAM word by byte address.
    pub fn ram_word(&self, addr: u32) -> u32 {
        self.sim.bus.ram.read((addr >> 2) as usize)
    }
}
