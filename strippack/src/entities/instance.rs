use crate::entities::{Item, Strip};
use crate::geometry::geo_traits::Shape;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Instance of the rectangular Strip Packing Problem: an ordered list of items to be packed into a strip of fixed width.
/// The order of the items is the initial placement order.
#[derive(Debug, Clone)]
pub struct SPInstance {
    /// Name of the instance, used in reports
    pub name: String,
    /// The items to be packed, in their initial order
    pub items: Vec<Item>,
    /// The strip (fixed width)
    pub strip: Strip,
}

impl SPInstance {
    pub fn new(name: String, items: Vec<Item>, strip: Strip) -> Result<Self> {
        ensure!(!items.is_empty(), "instance {name} contains no items");
        ensure!(
            items.iter().all(|item| item.width() > 0 && item.height() > 0),
            "all items should have a positive width and height"
        );
        ensure!(
            items.iter().map(|item| item.id).all_unique(),
            "all items should have a unique id. IDs: {:?}",
            items.iter().map(|item| item.id).sorted().collect_vec()
        );
        if let Some(too_wide) = items.iter().find(|item| item.width() > strip.width) {
            anyhow::bail!(
                "item {} (width {}) does not fit in a strip of width {}",
                too_wide.id,
                too_wide.width(),
                strip.width
            );
        }

        Ok(Self { name, items, strip })
    }

    pub fn item_area(&self) -> i64 {
        self.items.iter().map(|item| item.area()).sum()
    }

    pub fn total_item_qty(&self) -> usize {
        self.items.len()
    }

    /// No layout of this instance can be lower than this
    pub fn height_lower_bound(&self) -> i32 {
        let width = self.strip.width as i64;
        let area_bound = ((self.item_area() + width - 1) / width) as i32;
        let tallest_item = self
            .items
            .iter()
            .map(|item| i32::min(item.width(), item.height()))
            .max()
            .unwrap_or(0);
        i32::max(area_bound, tallest_item)
    }
}
