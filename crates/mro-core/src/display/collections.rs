//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles its own empty case so callers can print the result
//! without checking first.

use std::fmt;

use serde::Serialize;

use crate::models::{Part, Shortage, Task};

/// Newtype wrapper for displaying a list of tasks.
///
/// # Examples
///
/// ```rust
/// use mro_core::{catalog::defaults, display::TaskList};
///
/// let catalog = defaults::catalog();
/// let output = TaskList(catalog.tasks_for_system("Hydraulic")).to_string();
/// assert!(output.contains("## T002. Hydraulic Leak Repair"));
/// ```
#[derive(Serialize)]
#[serde(transparent)]
pub struct TaskList<'a>(pub Vec<&'a Task>);

impl fmt::Display for TaskList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            writeln!(f, "## {}. {}", task.id, task.name)?;
            writeln!(f)?;
            writeln!(f, "- **System**: {}", task.system)?;
            writeln!(f, "- **Steps**: {}", task.steps.len())?;
            if !task.required_parts.is_empty() {
                writeln!(f, "- **Parts**: {}", task.required_parts.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying plain names such as systems or aircraft.
#[derive(Serialize)]
#[serde(transparent)]
pub struct NameList<'a>(pub Vec<&'a str>);

impl fmt::Display for NameList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nothing to list.");
        }
        for name in &self.0 {
            writeln!(f, "- {name}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the stock snapshot as a table.
#[derive(Serialize)]
#[serde(transparent)]
pub struct StockSnapshot(pub Vec<Part>);

impl fmt::Display for StockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No parts in stock.");
        }
        writeln!(f, "| Part | Quantity |")?;
        writeln!(f, "|:-|-:|")?;
        for part in &self.0 {
            writeln!(f, "| {} | {} |", part.id, part.quantity)?;
        }
        Ok(())
    }
}

/// Result of checking a task's parts against the ledger.
#[derive(Serialize)]
#[serde(transparent)]
pub struct PartsCheck(pub Vec<Shortage>);

impl PartsCheck {
    /// True when no part is short.
    pub fn is_ready(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PartsCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ready() {
            return writeln!(f, "All required parts are in stock.");
        }
        writeln!(f, "Parts to order:")?;
        writeln!(f)?;
        for shortage in &self.0 {
            writeln!(f, "- {shortage}")?;
        }
        Ok(())
    }
}
