use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use strippack::entities::{Layout, SPInstance};
use thousands::Separable;

use crate::config::LNSConfig;
use crate::io::report::ProgressSink;
use crate::opt::context::RunContext;
use crate::opt::evaluator::{Evaluator, ScoredLayout};
use crate::opt::neighborhood::Neighborhood;

/// Best-improvement hill climb over the rotate and swap neighborhoods of a sequence.
pub struct LocalSearchOptimizer {
    pub instance: SPInstance,
    pub config: LNSConfig,
    pub evaluator: Evaluator,
}

impl LocalSearchOptimizer {
    pub fn new(instance: SPInstance, config: LNSConfig) -> Self {
        let evaluator = Evaluator::new(instance.strip);
        Self {
            instance,
            config,
            evaluator,
        }
    }

    /// Climbs until no neighbor strictly improves the current sequence, or for at most
    /// `ls_max_rounds` rounds. The returned layout is never worse than the placement of the input.
    pub fn solve<R: Rng, S: ProgressSink>(&mut self, ctx: &mut RunContext<R, S>) -> Result<Layout> {
        let mut best = self.evaluator.evaluate(&self.instance.items)?;
        let max_rounds = self.config.ls_max_rounds;

        for round in 0..max_rounds {
            match self.best_neighbor(&best)? {
                Some(candidate) if candidate.fitness > best.fitness => {
                    debug!(
                        "[LS] round {round}: improved fitness {:.3}% -> {:.3}%",
                        best.fitness * 100.0,
                        candidate.fitness * 100.0
                    );
                    best = candidate;
                    ctx.report(round, best.fitness, best.fitness)?;
                }
                candidate => {
                    let fitness = candidate.map_or(best.fitness, |c| c.fitness);
                    ctx.report(round, fitness, best.fitness)?;
                    info!("[LS] local optimum reached after {} rounds", round + 1);
                    break;
                }
            }
        }

        info!(
            "[LS] finished in {:.3}ms ({} evaluations), fitness: {:.3}%",
            ctx.elapsed().as_secs_f64() * 1000.0,
            self.evaluator.n_evals.separate_with_commas(),
            best.fitness * 100.0
        );
        Ok(best.layout)
    }

    /// The first of the best scoring neighbors of `current`, `None` if it has no neighbors.
    fn best_neighbor(&mut self, current: &ScoredLayout) -> Result<Option<ScoredLayout>> {
        let mut best: Option<ScoredLayout> = None;
        for neighbor in Neighborhood::rotate_and_swap(current.sequence()) {
            let scored = self.evaluator.evaluate(&neighbor)?;
            if best.as_ref().is_none_or(|b| scored.fitness > b.fitness) {
                best = Some(scored);
            }
        }
        Ok(best)
    }
}
