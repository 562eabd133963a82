//! Display formatting for sessions, checklists and reports.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers so each context
//! can format them its own way. Everything renders as markdown, which the
//! CLI passes through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Markdown      │
//! │ (Task, Report)  │───▶│ (TaskList,      │───▶│   Output        │
//! │                 │    │  FinalizeResult)│    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use mro_core::{display::StockSnapshot, models::Part};
//!
//! let stock = StockSnapshot(vec![Part::new("O-Ring", 4), Part::new("WrenchSet", 1)]);
//! let output = stock.to_string();
//! assert!(output.contains("| O-Ring | 4 |"));
//! ```
//!
//! Machine-readable output goes through [`to_json`] instead.

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

use serde::Serialize;

use crate::error::Result;

pub use collections::{NameList, PartsCheck, StockSnapshot, TaskList};
pub use results::{FinalizeResult, RestockResult};
pub use status::OperationStatus;

/// Pretty-printed JSON for any serializable value.
///
/// # Errors
///
/// Returns [`crate::MroError::Serialization`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
