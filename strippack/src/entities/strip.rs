use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Container of fixed width and unbounded height in which all items are packed.
/// Its bottom-left corner is the origin of the coordinate system.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strip {
    pub width: i32,
}

impl Strip {
    pub fn new(width: i32) -> Result<Self> {
        ensure!(width > 0, "strip width must be positive, got {width}");
        Ok(Strip { width })
    }
}
