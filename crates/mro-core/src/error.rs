//! Error types for the MRO workbench library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Shortage;

/// Comprehensive error type for all workbench operations.
#[derive(Error, Debug)]
pub enum MroError {
    /// The requested system category has no tasks in the catalog
    #[error("System '{system}' not found")]
    SystemNotFound { system: String },

    /// No task matches the requested system category and task key
    #[error("No task '{task}' found for system '{system}'")]
    TaskNotFound { system: String, task: String },

    /// A checklist step was attempted before the steps preceding it
    #[error("Step {} cannot be completed yet; step {} is next", .step + 1, .expected + 1)]
    OutOfOrder { step: usize, expected: usize },

    /// A step (or the whole checklist) has already been completed
    #[error("{}", already_complete_message(*.step))]
    AlreadyComplete { step: Option<usize> },

    /// Finalize was requested before every checklist step was done
    #[error("Checklist for '{task}' is incomplete: {completed}/{total} steps done")]
    ChecklistIncomplete {
        task: String,
        completed: usize,
        total: usize,
    },

    /// The checklist has already produced a report
    #[error("Checklist for '{task}' has already been finalized")]
    AlreadyFinalized { task: String },

    /// The report id counter cannot advance past `u32::MAX`
    #[error("No report ids left after RPT-{}", u32::MAX)]
    ReportIdsExhausted,

    /// Insufficient or missing stock for at least one part
    #[error("Insufficient stock: {}", format_shortages(.shortages))]
    Shortage { shortages: Vec<Shortage> },

    /// A catalog or stock record could not be parsed
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),

    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

fn already_complete_message(step: Option<usize>) -> String {
    match step {
        Some(step) => format!("Step {} is already complete", step + 1),
        None => "Checklist is already complete".to_string(),
    }
}

fn format_shortages(shortages: &[Shortage]) -> String {
    shortages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> MroError {
        MroError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl MroError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed record error for a 1-based line number.
    pub fn malformed(line: usize, reason: impl fmt::Display) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.to_string(),
        }
    }

    /// Creates a task lookup miss.
    pub fn task_not_found(system: impl Into<String>, task: impl Into<String>) -> Self {
        Self::TaskNotFound {
            system: system.into(),
            task: task.into(),
        }
    }
}

/// Extension trait for attaching a path to I/O errors.
pub trait IoResultExt<T> {
    /// Map an I/O error to [`MroError::FileSystem`] for the given path.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| MroError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for workbench operations
pub type Result<T> = std::result::Result<T, MroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_message_is_one_based() {
        let err = MroError::OutOfOrder {
            step: 1,
            expected: 0,
        };
        assert_eq!(
            err.to_string(),
            "Step 2 cannot be completed yet; step 1 is next"
        );
    }

    #[test]
    fn test_already_complete_messages() {
        let step = MroError::AlreadyComplete { step: Some(0) };
        assert_eq!(step.to_string(), "Step 1 is already complete");

        let checklist = MroError::AlreadyComplete { step: None };
        assert_eq!(checklist.to_string(), "Checklist is already complete");
    }

    #[test]
    fn test_shortage_message_lists_every_part() {
        let err = MroError::Shortage {
            shortages: vec![
                Shortage {
                    part: "DiagnosticKit".to_string(),
                    requested: 1,
                    available: Some(0),
                },
                Shortage {
                    part: "Gasket".to_string(),
                    requested: 2,
                    available: None,
                },
            ],
        };
        let message = err.to_string();
        assert!(message.contains("DiagnosticKit (need 1, have 0)"));
        assert!(message.contains("Gasket (need 2, not stocked)"));
    }

    #[test]
    fn test_finalize_guard_messages() {
        let err = MroError::AlreadyFinalized {
            task: "Hydraulic Leak Repair".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Checklist for 'Hydraulic Leak Repair' has already been finalized"
        );
        assert_eq!(
            MroError::ReportIdsExhausted.to_string(),
            "No report ids left after RPT-4294967295"
        );
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = MroError::invalid_input("quantity").with_reason("must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'quantity': must be positive"
        );
    }
}
