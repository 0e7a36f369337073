use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};
use strippack::entities::Item;
use strippack::util::assertions;

use crate::opt::evaluator::Evaluator;

pub const N_REPAIR_METHODS: usize = 3;

/// Strategy to rebuild a sequence around its destroyed positions.
/// Every method outputs a permutation of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairMethod {
    /// Reinsert every destroyed item at its best position
    Insert,
    /// Rotate destroyed items where that improves the fitness
    Rotate,
    /// Swap every destroyed item with its best non-destroyed partner
    Swap,
}

impl RepairMethod {
    pub const ALL: [RepairMethod; N_REPAIR_METHODS] =
        [RepairMethod::Insert, RepairMethod::Rotate, RepairMethod::Swap];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RepairMethod::Insert => "insert",
            RepairMethod::Rotate => "rotate",
            RepairMethod::Swap => "swap",
        }
    }
}

impl Display for RepairMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RepairMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match RepairMethod::ALL.into_iter().find(|m| m.name() == s) {
            Some(method) => Ok(method),
            None => bail!("unknown repair method: {s:?}"),
        }
    }
}

/// Repairs `items` at the `destroyed` positions, evaluating every attempt with a full placement.
pub fn repair(
    method: RepairMethod,
    destroyed: &[usize],
    items: &[Item],
    evaluator: &mut Evaluator,
) -> Result<Vec<Item>> {
    debug_assert!(destroyed.iter().all(|&i| i < items.len()));
    debug_assert!(destroyed.iter().all_unique());

    if destroyed.is_empty() {
        return Ok(items.to_vec());
    }

    let repaired = match method {
        RepairMethod::Swap => swap_repair(destroyed, items.to_vec(), evaluator)?,
        RepairMethod::Rotate => rotate_repair(destroyed, items.to_vec(), evaluator)?,
        RepairMethod::Insert => insert_repair(destroyed, items, evaluator)?,
    };

    debug_assert!(assertions::items_are_permutation(items, &repaired));
    Ok(repaired)
}

/// Greedy: every swap is committed before the next destroyed item is considered.
fn swap_repair(destroyed: &[usize], mut items: Vec<Item>, evaluator: &mut Evaluator) -> Result<Vec<Item>> {
    let mut is_destroyed = vec![false; items.len()];
    destroyed.iter().for_each(|&i| is_destroyed[i] = true);

    for &a in destroyed {
        let mut best: Option<(usize, f32)> = None;
        for b in (0..items.len()).filter(|&b| !is_destroyed[b]) {
            items.swap(a, b);
            let fitness = evaluator.evaluate(&items)?.fitness;
            items.swap(a, b);

            let best_fitness = best.map_or(0.0, |(_, f)| f);
            if fitness > best_fitness {
                best = Some((b, fitness));
            }
        }
        match best {
            Some((b, fitness)) => {
                trace!("[REPAIR] swapping positions {a} and {b}, fitness: {fitness:.3}");
                items.swap(a, b);
            }
            None => bail!(
                "could not repair position {a} with a swap: no non-destroyed partner among {} items",
                items.len()
            ),
        }
    }
    Ok(items)
}

fn rotate_repair(destroyed: &[usize], mut items: Vec<Item>, evaluator: &mut Evaluator) -> Result<Vec<Item>> {
    let mut current_fitness = evaluator.evaluate(&items)?.fitness;

    for &i in destroyed {
        items[i].rotate();
        let fitness = evaluator.evaluate(&items)?.fitness;
        if fitness > current_fitness {
            current_fitness = fitness;
        } else {
            items[i].rotate();
        }
    }
    Ok(items)
}

fn insert_repair(destroyed: &[usize], items: &[Item], evaluator: &mut Evaluator) -> Result<Vec<Item>> {
    let removed = destroyed.iter().map(|&i| items[i]).collect_vec();

    let mut remaining = items.to_vec();
    //descending, so the indices still to be removed remain valid
    for &i in destroyed.iter().sorted().rev() {
        remaining.remove(i);
    }

    for item in removed {
        let mut best: Option<(usize, f32)> = None;
        for pos in 0..=remaining.len() {
            remaining.insert(pos, item);
            let fitness = evaluator.evaluate(&remaining)?.fitness;
            remaining.remove(pos);

            if best.is_none_or(|(_, best_fitness)| fitness > best_fitness) {
                best = Some((pos, fitness));
            }
        }
        let (pos, _) = best.unwrap_or((0, 0.0));
        remaining.insert(pos, item);
    }
    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_round_trip() {
        for method in RepairMethod::ALL {
            assert_eq!(method.to_string().parse::<RepairMethod>().unwrap(), method);
            assert_eq!(RepairMethod::ALL[method.index()], method);
        }
        assert!("shuffle".parse::<RepairMethod>().is_err());
    }
}
