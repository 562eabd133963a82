//! Data models for parts, tasks, checklist states and reports.
//!
//! These are plain data types. Display implementations live in
//! [`crate::display::models`] so formatting stays separate from the data
//! itself, and the stateful types ([`crate::ledger::InventoryLedger`],
//! [`crate::checklist::OrderedChecklist`]) live in their own modules.
//!
//! # Examples
//!
//! ```rust
//! use mro_core::models::Task;
//!
//! let task = Task {
//!     id: "T003".to_string(),
//!     name: "Landing Gear Lubrication".to_string(),
//!     system: "Mechanical".to_string(),
//!     steps: vec!["Lift aircraft and secure".to_string()],
//!     required_parts: vec!["LubricationGrease".to_string(), "RagSet".to_string()],
//! };
//! assert!(task.requires("RagSet"));
//! ```

pub mod part;
pub mod report;
pub mod status;
pub mod task;


pub use part::{Part, Shortage};
pub use report::{MaintenanceReport, ReportId};
pub use status::StepState;
pub use task::Task;
