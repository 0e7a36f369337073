use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use strippack::io::svg::SvgDrawOptions;

use crate::opt::destroy::DestroyMethod;
use crate::opt::repair::RepairMethod;

/// Configuration shared by all optimizers
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LNSConfig {
    /// Width of the strip, used when the instance does not define one
    pub strip_width: i32,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Fraction of the sequence selected by a destroy operator every iteration
    pub destroy_fraction: f32,
    /// Temperature of the simulated annealing at the first iteration, cools down linearly to 0
    pub initial_temperature: f32,
    /// Score added to the chosen ALNS operators when their candidate is accepted
    pub accept_bonus: u32,
    /// Score added to the chosen ALNS operators when their candidate is a new global best
    pub best_bonus: u32,
    /// Maximum number of improving rounds of the local search
    pub ls_max_rounds: usize,
    /// Destroy operator of the (non-adaptive) LNS
    pub lns_destroy: DestroyMethod,
    /// Repair operator of the (non-adaptive) LNS
    pub lns_repair: RepairMethod,
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for LNSConfig {
    fn default() -> Self {
        Self {
            strip_width: 100,
            prng_seed: Some(0),
            destroy_fraction: 0.1,
            initial_temperature: 1.0,
            accept_bonus: 1,
            best_bonus: 2,
            ls_max_rounds: 100,
            lns_destroy: DestroyMethod::Random,
            lns_repair: RepairMethod::Swap,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl LNSConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.strip_width > 0,
            "strip width must be positive, got {}",
            self.strip_width
        );
        ensure!(
            (0.0..=1.0).contains(&self.destroy_fraction),
            "destroy fraction must be in [0, 1], got {}",
            self.destroy_fraction
        );
        ensure!(
            self.initial_temperature >= 0.0,
            "initial temperature cannot be negative, got {}",
            self.initial_temperature
        );
        ensure!(
            self.accept_bonus > 0 && self.best_bonus > 0,
            "operator bonuses must be positive, got accept: {}, best: {}",
            self.accept_bonus,
            self.best_bonus
        );
        Ok(())
    }
}
