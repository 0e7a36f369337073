use crate::entities::{Item, Layout};
use crate::geometry::geo_traits::CollidesWith;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn items_are_pairwise_disjoint(items: &[Item]) -> bool {
    for (a, b) in items.iter().tuple_combinations() {
        if a.rect().collides_with(&b.rect()) {
            error!(
                "collision detected between item {} {:?} and item {} {:?}",
                a.id,
                a.rect(),
                b.id,
                b.rect()
            );
            return false;
        }
    }
    true
}

pub fn layout_is_collision_free(layout: &Layout) -> bool {
    items_are_pairwise_disjoint(layout.placed_items())
}

/// True if `a` and `b` contain the same multiset of item ids.
pub fn items_are_permutation(a: &[Item], b: &[Item]) -> bool {
    a.len() == b.len()
        && a.iter().map(|i| i.id).sorted().collect_vec()
            == b.iter().map(|i| i.id).sorted().collect_vec()
}

/// True if every item in the layout lies on or above the floor and right of the left wall.
pub fn layout_is_anchored(layout: &Layout) -> bool {
    layout
        .placed_items()
        .iter()
        .all(|pi| pi.left() >= 0 && pi.bottom() >= 0)
}
