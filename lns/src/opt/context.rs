use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;

use crate::io::report::{ProgressRecord, ProgressSink};

/// Everything a run needs besides the instance and the configuration:
/// the source of randomness and the destination of the progress records.
pub struct RunContext<R: Rng, S: ProgressSink> {
    pub rng: R,
    pub sink: S,
    start: Instant,
}

impl<R: Rng, S: ProgressSink> RunContext<R, S> {
    pub fn new(rng: R, sink: S) -> Self {
        Self {
            rng,
            sink,
            start: Instant::now(),
        }
    }

    /// Time since the context was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn report(&mut self, iteration: usize, fitness: f32, best_fitness: f32) -> Result<()> {
        let record = ProgressRecord {
            iteration,
            fitness,
            best_fitness,
            elapsed: self.elapsed(),
        };
        self.sink.record(&record)
    }
}
