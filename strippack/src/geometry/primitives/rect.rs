use crate::geometry::geo_traits::{CollidesWith, Shape};
use anyhow::Result;
use anyhow::ensure;

/// Axis-aligned rectangle with integer coordinates
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    pub fn try_new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// True if the horizontal spans of `self` and `other` share an interior.
    pub fn x_overlaps(&self, other: &Rect) -> bool {
        spans_overlap((self.x_min, self.x_max), (other.x_min, other.x_max))
    }

    /// True if the vertical spans of `self` and `other` share an interior.
    pub fn y_overlaps(&self, other: &Rect) -> bool {
        spans_overlap((self.y_min, self.y_max), (other.y_min, other.y_max))
    }
}

/// Two half-open spans `[a.0, a.1)` and `[b.0, b.1)` overlap if they share an interior.
/// Spans that only touch at an endpoint do not overlap.
#[inline(always)]
pub fn spans_overlap(a: (i32, i32), b: (i32, i32)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.x_overlaps(other) && self.y_overlaps(other)
    }
}

impl Shape for Rect {
    fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }
}
