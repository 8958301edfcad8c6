//! Periodic pipe generation.

use super::types::Pipe;
use crate::config::GameConfig;
use log::debug;
use rand::Rng;

/// Counts ticks and emits a pipe at the right edge every `interval` ticks.
#[derive(Debug, Clone)]
pub struct Spawner {
    counter: u32,
    interval: u32,
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self {
            counter: 0,
            interval,
        }
    }

    /// Ticks since the last spawn.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Advance one tick. Returns a new pipe when the interval elapses, with
    /// its gap top drawn uniformly from `config.gap_top_range()`.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> Option<Pipe> {
        self.counter += 1;
        if self.counter < self.interval {
            return None;
        }
        self.counter = 0;

        let gap_top = rng.gen_range(config.gap_top_range());
        debug!("Spawning pipe with gap top {}", gap_top);
        Some(Pipe::new(
            config.width,
            gap_top as f64,
            config.pipe_width,
            config.pipe_gap,
        ))
    }
}
