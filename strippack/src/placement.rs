use crate::entities::{Item, Layout, Strip};
use crate::util::assertions;
use anyhow::{Result, ensure};

/// Packs a sequence of items into `strip` with the bottom-left heuristic.
///
/// The first item is placed in the origin, every following item is placed around the ones before it
/// with [`bl_place`]. The result depends on the order of `items` and nothing else.
/// The position of the input items is ignored.
pub fn bl_pack(items: &[Item], strip: Strip) -> Result<Layout> {
    ensure!(!items.is_empty(), "cannot place an empty sequence of items");

    let mut placed_items: Vec<Item> = Vec::with_capacity(items.len());

    let mut first = items[0];
    first.set_left(0);
    first.set_bottom(0);
    placed_items.push(first);

    for item in &items[1..] {
        let placed = bl_place(*item, &placed_items, strip);
        placed_items.push(placed);
    }

    debug_assert!(assertions::items_are_pairwise_disjoint(&placed_items));
    Ok(Layout::new(strip, placed_items))
}

/// Bottom-left heuristic for a single item.
///
/// The item enters flush against the right side of the strip, above every placed item.
/// It is then alternately dropped until it rests on something (or the floor) and slid left until it
/// rests against something (or the left wall), until neither move changes its position.
pub fn bl_place(mut item: Item, placed_items: &[Item], strip: Strip) -> Item {
    let unreached_height = placed_items.iter().map(|pi| pi.top()).max().unwrap_or(0);
    item.set_right(strip.width);
    item.set_bottom(unreached_height);

    loop {
        let bottom = drop_target(&item, placed_items);
        let dropped = bottom != item.bottom();
        item.set_bottom(bottom);

        let left = slide_target(&item, placed_items);
        let slid = left != item.left();
        item.set_left(left);

        if !dropped && !slid {
            return item;
        }
    }
}

/// The highest top edge below `item` among the placed items it overlaps horizontally, or the floor.
fn drop_target(item: &Item, placed_items: &[Item]) -> i32 {
    let rect = item.rect();
    let mut closest_y = 0;
    let mut min_distance = i32::MAX;
    for other in placed_items {
        if !rect.x_overlaps(&other.rect()) {
            continue;
        }
        let distance = item.bottom() - other.top();
        if distance >= 0 && distance < min_distance {
            min_distance = distance;
            closest_y = other.top();
            if distance == 0 {
                break;
            }
        }
    }
    closest_y
}

/// The closest right edge left of `item` among the placed items it overlaps vertically, or the wall.
fn slide_target(item: &Item, placed_items: &[Item]) -> i32 {
    let rect = item.rect();
    let mut closest_x = 0;
    let mut min_distance = i32::MAX;
    for other in placed_items {
        if !rect.y_overlaps(&other.rect()) {
            continue;
        }
        let distance = item.left() - other.right();
        if distance >= 0 && distance < min_distance {
            min_distance = distance;
            closest_x = other.right();
            if distance == 0 {
                break;
            }
        }
    }
    closest_x
}
