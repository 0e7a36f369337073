use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    pub width: i32,
    pub height: i32,
}

/// External representation of a [`SPInstance`](crate::entities::SPInstance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSPInstance {
    /// The name of the instance
    pub name: String,
    /// Width of the strip. If not specified, the width is taken from the configuration.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub strip_width: Option<i32>,
    /// The items to be packed, in their initial placement order
    pub items: Vec<ExtItem>,
}

/// External representation of a placed [`Item`](crate::entities::Item).
/// Coordinates follow the strip coordinate system: the origin is the bottom-left corner of the strip.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    /// The id of the item in the instance
    pub item_id: u64,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub top: i32,
    /// Whether the item was rotated by 90 degrees
    pub rotated: bool,
}

/// External representation of a [`Layout`](crate::entities::Layout), the solution of a strip packing instance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSPSolution {
    pub strip_width: i32,
    /// Top edge of the highest item
    pub height: i32,
    /// Fraction of the occupied region covered by items
    pub fitness: f32,
    /// Time it took to produce the solution, in milliseconds
    pub run_time_ms: u64,
    /// The items in the order they were placed
    pub placed_items: Vec<ExtPlacedItem>,
}
