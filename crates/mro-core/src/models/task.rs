//! Maintenance task model.

use serde::{Deserialize, Serialize};

/// A catalog maintenance task: ordered steps plus the parts it consumes.
///
/// Every entry in `required_parts` consumes one unit when the task is
/// finalized; a part listed twice consumes two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Catalog identifier (`T001`, `T002`, ...)
    pub id: String,

    /// Display name of the task
    pub name: String,

    /// Aircraft system category the task belongs to
    pub system: String,

    /// Step descriptions in the order they must be performed
    pub steps: Vec<String>,

    /// Part identifiers consumed by the task, one unit per entry
    #[serde(default)]
    pub required_parts: Vec<String>,
}

impl Task {
    /// Whether `key` names this task, by id or by display name.
    ///
    /// Both comparisons ignore ASCII case.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.eq_ignore_ascii_case(key) || self.name.eq_ignore_ascii_case(key)
    }

    /// Whether the task consumes the given part.
    pub fn requires(&self, part: &str) -> bool {
        self.required_parts.iter().any(|p| p == part)
    }
}
