//! Checklist step states.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// State of a single checklist step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    /// Earlier steps are still open
    Pending,

    /// Every earlier step is done; this one may be completed now
    Eligible,

    /// Step has been completed
    Done,
}

impl FromStr for StepState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StepState::Pending),
            "eligible" => Ok(StepState::Eligible),
            "done" => Ok(StepState::Done),
            _ => Err(format!("Invalid step state: {s}")),
        }
    }
}

impl StepState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepState::Pending => "pending",
            StepState::Eligible => "eligible",
            StepState::Done => "done",
        }
    }

    /// Checkbox-style marker used when rendering a checklist.
    ///
    /// ```rust
    /// use mro_core::models::StepState;
    ///
    /// assert_eq!(StepState::Done.marker(), "[x]");
    /// assert_eq!(StepState::Eligible.marker(), "[>]");
    /// assert_eq!(StepState::Pending.marker(), "[ ]");
    /// ```
    pub fn marker(&self) -> &'static str {
        match self {
            StepState::Done => "[x]",
            StepState::Eligible => "[>]",
            StepState::Pending => "[ ]",
        }
    }
}
