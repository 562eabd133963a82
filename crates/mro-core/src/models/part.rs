//! Part and shortage models.

use serde::{Deserialize, Serialize};

/// A stocked part and its available quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Part {
    /// Unique part identifier (e.g. `O-Ring`)
    pub id: String,

    /// Units currently on hand
    pub quantity: u32,
}

impl Part {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// One part that cannot cover a requested deduction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shortage {
    /// Part identifier as requested
    pub part: String,

    /// Total units the request needed from this part
    pub requested: u32,

    /// Units on hand, `None` when the part is not stocked at all
    pub available: Option<u32>,
}
