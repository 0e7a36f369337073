use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use strippack::entities::{Layout, SPInstance};
use thousands::Separable;

use crate::config::LNSConfig;
use crate::io::report::ProgressSink;
use crate::opt::acceptance;
use crate::opt::context::RunContext;
use crate::opt::destroy::{DestroyMethod, destroy};
use crate::opt::evaluator::{Evaluator, ScoredLayout};
use crate::opt::repair::{RepairMethod, repair};

/// Decides which destroy and repair operators are applied in every iteration of the search,
/// and is informed about the outcome.
pub trait OperatorSelector {
    /// Tag used to prefix log messages
    fn tag(&self) -> &'static str;

    fn select(&mut self, rng: &mut impl Rng) -> (DestroyMethod, RepairMethod);

    /// The candidate produced by the operators replaced the running solution
    fn accepted(&mut self, _destroy: DestroyMethod, _repair: RepairMethod) {}

    /// The candidate produced by the operators is a new global best
    fn new_best(&mut self, _destroy: DestroyMethod, _repair: RepairMethod) {}
}

/// The same pair of operators in every iteration
#[derive(Debug, Clone, Copy)]
pub struct FixedOperators {
    pub destroy: DestroyMethod,
    pub repair: RepairMethod,
}

impl OperatorSelector for FixedOperators {
    fn tag(&self) -> &'static str {
        "[LNS]"
    }

    fn select(&mut self, _rng: &mut impl Rng) -> (DestroyMethod, RepairMethod) {
        (self.destroy, self.repair)
    }
}

/// Large Neighborhood Search: destroys and repairs part of the running sequence every iteration.
pub struct LNSOptimizer {
    pub instance: SPInstance,
    pub config: LNSConfig,
    pub max_iterations: usize,
    /// Accept candidates with the simulated annealing criterion.
    /// Without it, the running solution only moves to new global bests.
    pub annealing: bool,
    pub evaluator: Evaluator,
}

impl LNSOptimizer {
    pub fn new(instance: SPInstance, config: LNSConfig, max_iterations: usize, annealing: bool) -> Self {
        let evaluator = Evaluator::new(instance.strip);
        Self {
            instance,
            config,
            max_iterations,
            annealing,
            evaluator,
        }
    }

    pub fn solve<R: Rng, S: ProgressSink>(&mut self, ctx: &mut RunContext<R, S>) -> Result<Layout> {
        let mut operators = FixedOperators {
            destroy: self.config.lns_destroy,
            repair: self.config.lns_repair,
        };
        info!(
            "[LNS] destroying {} with {}% of the items, repairing with {}",
            operators.destroy,
            self.config.destroy_fraction * 100.0,
            operators.repair
        );
        let best = search(
            &self.instance,
            &self.config,
            self.max_iterations,
            self.annealing,
            &mut operators,
            &mut self.evaluator,
            ctx,
        )?;
        Ok(best.layout)
    }
}

/// Destroy and repair loop shared by the LNS and ALNS.
///
/// Both `best` and `running` start from the placement of the instance's sequence.
/// A new global best always becomes the running solution, with or without annealing.
pub(crate) fn search<R: Rng, S: ProgressSink>(
    instance: &SPInstance,
    config: &LNSConfig,
    max_iterations: usize,
    annealing: bool,
    selector: &mut impl OperatorSelector,
    evaluator: &mut Evaluator,
    ctx: &mut RunContext<R, S>,
) -> Result<ScoredLayout> {
    let tag = selector.tag();
    let mut best = evaluator.evaluate(&instance.items)?;
    let mut running = best.clone();

    for i in 0..max_iterations {
        let temperature = acceptance::temperature(config.initial_temperature, i, max_iterations);

        let (destroy_method, repair_method) = selector.select(&mut ctx.rng);
        let destroyed = destroy(
            destroy_method,
            config.destroy_fraction,
            running.sequence(),
            &mut ctx.rng,
        );
        let repaired = repair(repair_method, &destroyed, running.sequence(), evaluator)?;
        let candidate = evaluator.evaluate(&repaired)?;
        let fitness = candidate.fitness;

        if annealing && acceptance::sa_accept(fitness, running.fitness, temperature, &mut ctx.rng) {
            selector.accepted(destroy_method, repair_method);
            running = candidate.clone();
        }

        if fitness > best.fitness {
            debug!(
                "{tag} new best at iteration {i}: {:.3}% ({destroy_method}, {repair_method})",
                fitness * 100.0
            );
            selector.new_best(destroy_method, repair_method);
            running = candidate.clone();
            best = candidate;
        }

        debug!(
            "{tag} iteration {i}/{max_iterations} fitness: {:.2}% global best: {:.2}%",
            fitness * 100.0,
            best.fitness * 100.0
        );
        ctx.report(i, fitness, best.fitness)?;
    }

    info!(
        "{tag} finished {} iterations in {:.3}ms ({} evaluations), best fitness: {:.3}%",
        max_iterations.separate_with_commas(),
        ctx.elapsed().as_secs_f64() * 1000.0,
        evaluator.n_evals.separate_with_commas(),
        best.fitness * 100.0
    );
    Ok(best)
}
