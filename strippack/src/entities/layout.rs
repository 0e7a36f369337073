use crate::entities::{Item, Strip};
use crate::geometry::geo_traits::Shape;
use crate::util::assertions;

/// A sequence of placed items inside a [`Strip`].
/// The order of the items is the order in which they were placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub strip: Strip,
    placed_items: Vec<Item>,
}

impl Layout {
    pub fn new(strip: Strip, placed_items: Vec<Item>) -> Self {
        debug_assert!(!placed_items.is_empty(), "a layout contains at least one item");
        debug_assert!(assertions::items_are_pairwise_disjoint(&placed_items));
        Layout {
            strip,
            placed_items,
        }
    }

    pub fn placed_items(&self) -> &[Item] {
        &self.placed_items
    }

    /// Top edge of the highest item
    pub fn height(&self) -> i32 {
        self.placed_items
            .iter()
            .map(|pi| pi.top())
            .max()
            .unwrap_or(0)
    }

    /// Width of the region the items occupy: the strip width, unless a rotated item sticks out of it.
    pub fn width(&self) -> i32 {
        self.placed_items
            .iter()
            .map(|pi| pi.right())
            .fold(self.strip.width, i32::max)
    }

    /// Sum of the areas of all placed items
    pub fn item_area(&self) -> i64 {
        self.placed_items.iter().map(|pi| pi.area()).sum()
    }

    /// Fraction of the occupied bounding region covered by items, in (0, 1].
    /// A value of 1.0 means a gap-free packing up to [`Layout::height`].
    pub fn fitness(&self) -> f32 {
        let bbox_area = self.height() as f32 * self.width() as f32;
        debug_assert!(bbox_area > 0.0);
        self.item_area() as f32 / bbox_area
    }
}
