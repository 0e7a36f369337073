use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::opt::destroy::{DestroyMethod, N_DESTROY_METHODS};
use crate::opt::repair::{N_REPAIR_METHODS, RepairMethod};

/// Adaptive weights of the destroy and repair operators.
/// All scores start at 1 and only ever grow, so no operator is ever excluded from selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorScores {
    pub destroy: [u32; N_DESTROY_METHODS],
    pub repair: [u32; N_REPAIR_METHODS],
}

impl Default for OperatorScores {
    fn default() -> Self {
        Self {
            destroy: [1; N_DESTROY_METHODS],
            repair: [1; N_REPAIR_METHODS],
        }
    }
}

impl OperatorScores {
    pub fn select(&self, rng: &mut impl Rng) -> (DestroyMethod, RepairMethod) {
        let destroy = DestroyMethod::ALL[roulette_wheel(&self.destroy, rng)];
        let repair = RepairMethod::ALL[roulette_wheel(&self.repair, rng)];
        (destroy, repair)
    }

    pub fn reward(&mut self, destroy: DestroyMethod, repair: RepairMethod, bonus: u32) {
        self.destroy[destroy.index()] += bonus;
        self.repair[repair.index()] += bonus;
    }
}

/// Selects index `i` with probability `scores[i] / sum(scores)`.
///
/// Draws `r` uniformly from `[0, total)` and subtracts the scores in order until `r` becomes negative.
pub fn roulette_wheel(scores: &[u32], rng: &mut impl Rng) -> usize {
    let total: u64 = scores.iter().map(|&s| s as u64).sum();
    debug_assert!(total > 0, "roulette wheel over scores summing to zero");

    let mut r = rng.random_range(0..total) as i64;
    for (i, &score) in scores.iter().enumerate() {
        r -= score as i64;
        if r < 0 {
            return i;
        }
    }
    //r < total, the loop always returns
    scores.len() - 1
}
