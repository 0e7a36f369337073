use std::cmp::Reverse;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strippack::entities::Item;
use strippack::geometry::geo_traits::Shape;

pub const N_DESTROY_METHODS: usize = 9;

/// Strategy to select the part of a sequence that is destroyed.
/// The sorting methods select the first items of the sequence sorted by the named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestroyMethod {
    AreaAsc,
    AspectRatioAsc,
    HeightAsc,
    WidthAsc,
    AreaDesc,
    AspectRatioDesc,
    HeightDesc,
    WidthDesc,
    Random,
}

impl DestroyMethod {
    pub const ALL: [DestroyMethod; N_DESTROY_METHODS] = [
        DestroyMethod::AreaAsc,
        DestroyMethod::AspectRatioAsc,
        DestroyMethod::HeightAsc,
        DestroyMethod::WidthAsc,
        DestroyMethod::AreaDesc,
        DestroyMethod::AspectRatioDesc,
        DestroyMethod::HeightDesc,
        DestroyMethod::WidthDesc,
        DestroyMethod::Random,
    ];

    /// Position of the method in [`DestroyMethod::ALL`], used to index score arrays
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            DestroyMethod::AreaAsc => "area_asc",
            DestroyMethod::AspectRatioAsc => "aspect_ratio_asc",
            DestroyMethod::HeightAsc => "height_asc",
            DestroyMethod::WidthAsc => "width_asc",
            DestroyMethod::AreaDesc => "area_desc",
            DestroyMethod::AspectRatioDesc => "aspect_ratio_desc",
            DestroyMethod::HeightDesc => "height_desc",
            DestroyMethod::WidthDesc => "width_desc",
            DestroyMethod::Random => "random",
        }
    }
}

impl Display for DestroyMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DestroyMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match DestroyMethod::ALL.into_iter().find(|m| m.name() == s) {
            Some(method) => Ok(method),
            None => bail!("unknown destroy method: {s:?}"),
        }
    }
}

/// Selects `floor(fraction * n)` indices of `items` to be repaired.
///
/// The sorts are stable: items with equal keys are selected in sequence order.
pub fn destroy(
    method: DestroyMethod,
    fraction: f32,
    items: &[Item],
    rng: &mut impl Rng,
) -> Vec<usize> {
    let n_destroy = ((fraction * items.len() as f32) as usize).min(items.len());
    if n_destroy == 0 {
        return vec![];
    }

    let order = match method {
        DestroyMethod::AreaAsc => sorted_indices(items, |i| i.area()),
        DestroyMethod::AreaDesc => sorted_indices(items, |i| Reverse(i.area())),
        DestroyMethod::AspectRatioAsc => sorted_indices(items, aspect_ratio_key),
        DestroyMethod::AspectRatioDesc => sorted_indices(items, |i| Reverse(aspect_ratio_key(i))),
        DestroyMethod::HeightAsc => sorted_indices(items, |i| i.height()),
        DestroyMethod::HeightDesc => sorted_indices(items, |i| Reverse(i.height())),
        DestroyMethod::WidthAsc => sorted_indices(items, |i| i.width()),
        DestroyMethod::WidthDesc => sorted_indices(items, |i| Reverse(i.width())),
        DestroyMethod::Random => {
            let mut indices = (0..items.len()).collect_vec();
            indices.shuffle(rng);
            indices
        }
    };

    order.into_iter().take(n_destroy).collect()
}

fn sorted_indices<K: Ord>(items: &[Item], key: impl Fn(&Item) -> K) -> Vec<usize> {
    (0..items.len())
        .sorted_by_key(|&i| key(&items[i]))
        .collect_vec()
}

fn aspect_ratio_key(item: &Item) -> OrderedFloat<f32> {
    OrderedFloat(item.aspect_ratio())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_round_trip() {
        for method in DestroyMethod::ALL {
            assert_eq!(method.to_string().parse::<DestroyMethod>().unwrap(), method);
            assert_eq!(DestroyMethod::ALL[method.index()], method);
        }
        assert!("area".parse::<DestroyMethod>().is_err());
    }
}
