use anyhow::Result;
use clap::ValueEnum;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strippack::entities::{Layout, SPInstance};
use strippack::placement::bl_pack;

use crate::config::LNSConfig;
use crate::io::report::ProgressSink;
use crate::opt::alns::ALNSOptimizer;
use crate::opt::context::RunContext;
use crate::opt::lns::LNSOptimizer;
use crate::opt::local_search::LocalSearchOptimizer;

pub mod acceptance;
pub mod alns;
pub mod context;
pub mod destroy;
pub mod evaluator;
pub mod lns;
pub mod local_search;
pub mod neighborhood;
pub mod repair;
pub mod scores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Algorithm {
    /// A single bottom-left placement of the input sequence
    #[value(name = "BL")]
    BottomLeft,
    /// Local search over rotations and swaps
    #[value(name = "LS")]
    LocalSearch,
    /// Large Neighborhood Search
    #[value(name = "LNS")]
    Lns,
    /// Adaptive Large Neighborhood Search
    #[value(name = "ALNS")]
    Alns,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BottomLeft => "BL",
            Algorithm::LocalSearch => "LS",
            Algorithm::Lns => "LNS",
            Algorithm::Alns => "ALNS",
        }
    }
}

/// Runs `algorithm` on the instance and returns the best layout it found.
/// `max_iterations` and `annealing` only apply to the (A)LNS.
pub fn solve<R: Rng, S: ProgressSink>(
    algorithm: Algorithm,
    instance: &SPInstance,
    config: &LNSConfig,
    max_iterations: usize,
    annealing: bool,
    ctx: &mut RunContext<R, S>,
) -> Result<Layout> {
    let layout = match algorithm {
        Algorithm::BottomLeft => {
            let layout = bl_pack(&instance.items, instance.strip)?;
            info!(
                "[BL] placed {} items, fitness: {:.3}%",
                layout.placed_items().len(),
                layout.fitness() * 100.0
            );
            layout
        }
        Algorithm::LocalSearch => {
            LocalSearchOptimizer::new(instance.clone(), *config).solve(ctx)?
        }
        Algorithm::Lns => {
            LNSOptimizer::new(instance.clone(), *config, max_iterations, annealing).solve(ctx)?
        }
        Algorithm::Alns => {
            ALNSOptimizer::new(instance.clone(), *config, max_iterations, annealing)
                .solve(ctx)?
                .layout
        }
    };
    ctx.sink.finish()?;
    Ok(layout)
}
