//! Core library for the MRO workbench.
//!
//! This crate holds the maintenance workflow: a task catalog grouped by
//! aircraft system, an inventory ledger that never goes negative, ordered
//! checklists that only accept steps in sequence, and a session that ties
//! them together and appends maintenance reports to a log.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): format lists and operation results
//! - **Report Log** ([`report_log`]): the fixed plain-text block appended per
//!   report
//!
//! # Quick Start
//!
//! ```rust
//! use mro_core::{catalog::defaults, MroError, SessionBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::TempDir::new()?;
//! let mut session = SessionBuilder::new()
//!     .with_catalog(defaults::catalog())
//!     .with_ledger(defaults::ledger())
//!     .with_report_log(dir.path().join("maintenance_reports.txt"))
//!     .with_aircraft(Some("Boeing 737".to_string()))
//!     .build()?;
//!
//! let task = session.select_task("Hydraulic", "Hydraulic Leak Repair")?.clone();
//! let mut checklist = session.begin_checklist(&task);
//!
//! // Steps only complete in order.
//! assert!(matches!(
//!     checklist.complete_step(1),
//!     Err(MroError::OutOfOrder { step: 1, expected: 0 })
//! ));
//! while !checklist.is_complete() {
//!     checklist.complete_next()?;
//! }
//!
//! let report = session.finalize(&mut checklist)?;
//! session.emit(&report)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod checklist;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod report_log;
pub mod session;

// Re-export commonly used types
pub use catalog::{LoadSummary, TaskCatalog};
pub use checklist::OrderedChecklist;
pub use display::{
    FinalizeResult, NameList, OperationStatus, PartsCheck, RestockResult, StockSnapshot,
    TaskList,
};
pub use error::{MroError, Result};
pub use ledger::{InventoryLedger, SharedLedger};
pub use models::{MaintenanceReport, Part, ReportId, Shortage, StepState, Task};
pub use report_log::{ReportIdGenerator, ReportLog};
pub use session::{MaintenanceSession, SessionBuilder};
