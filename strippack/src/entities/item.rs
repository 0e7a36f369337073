use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;

/// Rectangular item to be packed.
///
/// The same type is used for an item that still has to be placed and for one that is placed in a
/// [`Layout`](crate::entities::Layout). The position (`left`, `bottom`) is only meaningful for the latter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Identity of the item as defined in the input, never recomputed
    pub id: usize,
    width: i32,
    height: i32,
    rotated: bool,
    left: i32,
    bottom: i32,
}

impl Item {
    pub fn new(id: usize, width: i32, height: i32) -> Item {
        debug_assert!(width > 0 && height > 0, "item {id} has a non-positive dimension");
        Item {
            id,
            width,
            height,
            rotated: false,
            left: 0,
            bottom: 0,
        }
    }

    /// Rotates the item by 90 degrees around its bottom-left corner: width and height are swapped.
    /// Rotating twice restores the original geometry.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.rotated = !self.rotated;
    }

    /// Returns a copy of the item with its rotation toggled.
    pub fn rotated(mut self) -> Item {
        self.rotate();
        self
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn top(&self) -> i32 {
        self.bottom + self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn set_left(&mut self, left: i32) {
        self.left = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.left = right - self.width;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.bottom = bottom;
    }

    pub fn set_top(&mut self, top: i32) {
        self.bottom = top - self.height;
    }

    /// The region of the strip occupied by the item at its current position.
    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.left(),
            y_min: self.bottom(),
            x_max: self.right(),
            y_max: self.top(),
        }
    }
}

impl Shape for Item {
    fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_keep_dimensions() {
        let mut item = Item::new(3, 4, 7);
        item.set_right(20);
        item.set_top(30);
        assert_eq!((item.left(), item.bottom()), (16, 23));
        assert_eq!((item.width(), item.height()), (4, 7));

        item.set_left(0);
        item.set_bottom(0);
        assert_eq!(item.rect(), Rect::try_new(0, 0, 4, 7).unwrap());
    }

    #[test]
    fn rotation_swaps_dimensions_together() {
        let item = Item::new(1, 4, 7).rotated();
        assert_eq!((item.width(), item.height()), (7, 4));
        assert!(item.is_rotated());
        assert_eq!(item.area(), 28);
    }
}
