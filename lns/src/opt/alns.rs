use anyhow::Result;
use itertools::Itertools;
use log::info;
use rand::Rng;
use strippack::entities::{Layout, SPInstance};

use crate::config::LNSConfig;
use crate::io::report::ProgressSink;
use crate::opt::context::RunContext;
use crate::opt::destroy::DestroyMethod;
use crate::opt::evaluator::Evaluator;
use crate::opt::lns::{OperatorSelector, search};
use crate::opt::repair::RepairMethod;
use crate::opt::scores::OperatorScores;

/// Roulette wheel selection over scores that grow with the success of the operators
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveOperators {
    pub scores: OperatorScores,
    pub accept_bonus: u32,
    pub best_bonus: u32,
}

impl OperatorSelector for AdaptiveOperators {
    fn tag(&self) -> &'static str {
        "[ALNS]"
    }

    fn select(&mut self, rng: &mut impl Rng) -> (DestroyMethod, RepairMethod) {
        self.scores.select(rng)
    }

    fn accepted(&mut self, destroy: DestroyMethod, repair: RepairMethod) {
        self.scores.reward(destroy, repair, self.accept_bonus);
    }

    fn new_best(&mut self, destroy: DestroyMethod, repair: RepairMethod) {
        self.scores.reward(destroy, repair, self.best_bonus);
    }
}

/// Result of an ALNS run: the best layout and the operator scores learned along the way
#[derive(Debug, Clone)]
pub struct ALNSOutcome {
    pub layout: Layout,
    pub scores: OperatorScores,
}

/// Adaptive Large Neighborhood Search: the LNS loop with operators chosen by their past success.
pub struct ALNSOptimizer {
    pub instance: SPInstance,
    pub config: LNSConfig,
    pub max_iterations: usize,
    pub annealing: bool,
    pub evaluator: Evaluator,
}

impl ALNSOptimizer {
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

    pub fn solve<R: Rng, S: ProgressSink>(&mut self, ctx: &mut RunContext<R, S>) -> Result<ALNSOutcome> {
        let mut operators = AdaptiveOperators {
            scores: OperatorScores::default(),
            accept_bonus: self.config.accept_bonus,
            best_bonus: self.config.best_bonus,
        };
        let best = search(
            &self.instance,
            &self.config,
            self.max_iterations,
            self.annealing,
            &mut operators,
            &mut self.evaluator,
            ctx,
        )?;

        let scores = operators.scores;
        info!(
            "[ALNS] destroy scores: {}",
            format_scores(DestroyMethod::ALL.iter().map(|m| m.name()), &scores.destroy)
        );
        info!(
            "[ALNS] repair scores: {}",
            format_scores(RepairMethod::ALL.iter().map(|m| m.name()), &scores.repair)
        );

        Ok(ALNSOutcome {
            layout: best.layout,
            scores,
        })
    }
}

fn format_scores<'a>(names: impl Iterator<Item = &'a str>, scores: &[u32]) -> String {
    names
        .zip(scores)
        .map(|(name, score)| format!("{name}: {score}"))
        .join(", ")
}
