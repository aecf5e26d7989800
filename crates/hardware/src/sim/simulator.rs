//! Simulator: owns the machine state and the pipeline side-by-side.
//!
//! The simulator is a two-state machine, Running then Halted. Each tick
//! asks the pipeline for the successor snapshot and swaps it in; the
//! snapshot a failing tick started from is left untouched.

use tracing::info;

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::pipeline::engine::Pipeline;
use crate::core::state::MachineState;
use crate::sim::loader::Program;
use crate::stats::SimStats;

/// Top-level simulator: architectural state + pipeline + statistics.
#[derive(Debug)]
pub struct Simulator {
    state: MachineState,
    pipeline: Pipeline,
    stats: SimStats,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator in its reset state with `program` loaded.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the program does not fit the configured memories.
    pub fn new(program: &Program, config: &Config) -> Result<Self, LoadError> {
        program.check_fits(&config.memory)?;
        Ok(Self {
            state: MachineState::new(program, &config.memory),
            pipeline: Pipeline::new(&config.pipeline),
            stats: SimStats::default(),
            max_cycles: config.general.max_cycles,
        })
    }

    /// The state at the current cycle boundary.
    pub const fn state(&self) -> &MachineState {
        &self.state
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// True once HALT has reached the WB/END latch.
    pub fn is_halted(&self) -> bool {
        self.state.is_halted()
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// - [`SimError::Halted`] if the machine has already halted.
    /// - [`SimError::CycleLimit`] if the configured cycle cap has been reached.
    /// - Any error raised by the pipeline stages.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let exceeded = self
            .max_cycles
            .filter(|&limit| self.state.cycles >= limit && !self.state.is_halted());
        if let Some(limit) = exceeded {
            return Err(SimError::CycleLimit(limit));
        }

        let cycle = self.pipeline.step(&self.state)?;
        self.stats.record(&cycle.events);
        self.state = cycle.state;

        if self.state.is_halted() {
            info!(
                cycles = self.state.cycles,
                retired = self.stats.instructions_retired,
                "machine halted"
            );
        }
        Ok(())
    }

    /// Runs until HALT reaches WB/END.
    ///
    /// `observer` sees the state at the start of every cycle, before it is
    /// stepped; it is not called for the final halted state.
    ///
    /// # Errors
    ///
    /// Stops at the first error from [`tick`](Self::tick); the state is left at
    /// the start of the failing cycle.
    pub fn run<F>(&mut self, mut observer: F) -> Result<(), SimError>
    where
        F: FnMut(&MachineState),
    {
        while !self.state.is_halted() {
            observer(&self.state);
            self.tick()?;
        }
        Ok(())
    }

    /// Runs until HALT reaches WB/END without observing intermediate states.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_to_halt(&mut self) -> Result<(), SimError> {
        self.run(|_| {})
    }
}
