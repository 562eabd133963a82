//! Maintenance session coordination.
//!
//! [`MaintenanceSession`] owns everything a technician's session works on:
//! the task catalog, the parts ledger, the report log and the report id
//! counter. There is no process-wide state; build a session with
//! [`SessionBuilder`] and pass it around.
//!
//! A task runs through the session in four moves:
//!
//! ```text
//! select_task ──▶ begin_checklist ──▶ complete_step … ──▶ finalize ──▶ emit
//!  (catalog)       (fresh checklist)   (in order)        (deduct,     (append
//!                                                         report)      to log)
//! ```
//!
//! Dropping a checklist before `finalize` abandons the task and leaves the
//! ledger untouched.
//!
//! ```rust
//! use mro_core::{catalog::defaults, SessionBuilder};
//!
//! # fn example() -> mro_core::Result<()> {
//! # let dir = tempfile::TempDir::new().unwrap();
//! let mut session = SessionBuilder::new()
//!     .with_catalog(defaults::catalog())
//!     .with_ledger(defaults::ledger())
//!     .with_report_log(dir.path().join("maintenance_reports.txt"))
//!     .build()?;
//!
//! let task = session.select_task("Mechanical", "Landing Gear Lubrication")?.clone();
//! let mut checklist = session.begin_checklist(&task);
//! while !checklist.is_complete() {
//!     checklist.complete_next()?;
//! }
//!
//! let report = session.finalize(&mut checklist)?;
//! session.emit(&report)?;
//! assert_eq!(session.ledger().quantity("RagSet"), Some(9));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::path::{Path, PathBuf};

use jiff::{civil::Date, Zoned};
use log::{debug, info};

pub mod builder;


pub use builder::SessionBuilder;

use crate::{
    catalog::{parser::save_stock_file, LoadSummary, TaskCatalog},
    checklist::OrderedChecklist,
    error::{MroError, Result},
    ledger::InventoryLedger,
    models::{MaintenanceReport, Shortage, Task},
    report_log::{ReportIdGenerator, ReportLog},
};

/// Units of each required part consumed per task occurrence.
const UNITS_PER_PART: u32 = 1;

/// Coordinator for catalog lookup, checklists, stock deduction and reports.
#[derive(Debug)]
pub struct MaintenanceSession {
    catalog: TaskCatalog,
    ledger: InventoryLedger,
    report_log: ReportLog,
    report_ids: ReportIdGenerator,
    stock_path: Option<PathBuf>,
    aircraft: Option<String>,
    task_summary: LoadSummary,
    stock_summary: LoadSummary,
}

impl MaintenanceSession {
    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn report_log(&self) -> &ReportLog {
        &self.report_log
    }

    /// Where [`MaintenanceSession::save_stock`] writes, if anywhere.
    pub fn stock_path(&self) -> Option<&Path> {
        self.stock_path.as_deref()
    }

    pub fn aircraft(&self) -> Option<&str> {
        self.aircraft.as_deref()
    }

    /// Chooses the aircraft recorded on subsequent reports.
    pub fn set_aircraft(&mut self, aircraft: Option<String>) {
        self.aircraft = aircraft.filter(|a| !a.trim().is_empty());
    }

    /// How the task catalog was loaded.
    pub fn task_summary(&self) -> LoadSummary {
        self.task_summary
    }

    /// How the stock was loaded.
    pub fn stock_summary(&self) -> LoadSummary {
        self.stock_summary
    }

    /// Known system categories.
    pub fn systems(&self) -> Vec<&str> {
        self.catalog.systems()
    }

    /// Candidate tasks for a problem reported against `system`.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::SystemNotFound`] if no task belongs to `system`.
    pub fn tasks_for_system(&self, system: &str) -> Result<Vec<&Task>> {
        let tasks = self.catalog.tasks_for_system(system);
        if tasks.is_empty() {
            return Err(MroError::SystemNotFound {
                system: system.to_string(),
            });
        }
        Ok(tasks)
    }

    /// Looks up a task of `system` by id or name.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::TaskNotFound`] if the system has no such task.
    pub fn select_task(&self, system: &str, task: &str) -> Result<&Task> {
        self.catalog
            .find(system, task)
            .ok_or_else(|| MroError::task_not_found(system, task))
    }

    /// Starts a fresh checklist for `task`.
    pub fn begin_checklist(&self, task: &Task) -> OrderedChecklist {
        debug!("Starting checklist for {} ({})", task.id, task.name);
        OrderedChecklist::new(task.clone())
    }

    /// Required parts the ledger cannot currently cover.
    pub fn missing_parts(&self, task: &Task) -> Vec<Shortage> {
        self.ledger.shortages(&task.required_parts, UNITS_PER_PART)
    }

    /// Adds stock for `part` and returns its new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::InvalidInput`] for a zero quantity or blank part.
    pub fn restock(&mut self, part: &str, quantity: u32) -> Result<u32> {
        let part = part.trim();
        if part.is_empty() {
            return Err(MroError::invalid_input("part").with_reason("part identifier is empty"));
        }
        if quantity == 0 {
            return Err(MroError::invalid_input("quantity").with_reason("must be at least 1"));
        }
        self.ledger.add_stock(part, quantity);
        let on_hand = self.ledger.quantity(part).unwrap_or(quantity);
        info!("Restocked {part} by {quantity} (now {on_hand})");
        Ok(on_hand)
    }

    /// Deducts the checklist task's parts and builds its report, dated today.
    ///
    /// # Errors
    ///
    /// See [`MaintenanceSession::finalize_on`].
    pub fn finalize(&mut self, checklist: &mut OrderedChecklist) -> Result<MaintenanceReport> {
        self.finalize_on(checklist, Zoned::now().date())
    }

    /// Deducts the checklist task's parts and builds its report.
    ///
    /// A checklist produces at most one report. Nothing changes on failure:
    /// no stock is deducted, no report id is consumed and the checklist can
    /// be finalized again once the cause is fixed.
    ///
    /// # Errors
    ///
    /// - [`MroError::AlreadyFinalized`] if the checklist already has a report.
    /// - [`MroError::ChecklistIncomplete`] if any step is still open.
    /// - [`MroError::ReportIdsExhausted`] if no report id is left.
    /// - [`MroError::Shortage`] if the ledger cannot cover the task's parts.
    pub fn finalize_on(
        &mut self,
        checklist: &mut OrderedChecklist,
        date: Date,
    ) -> Result<MaintenanceReport> {
        let task = checklist.task();
        if checklist.is_finalized() {
            return Err(MroError::AlreadyFinalized {
                task: task.name.clone(),
            });
        }
        if !checklist.is_complete() {
            return Err(MroError::ChecklistIncomplete {
                task: task.name.clone(),
                completed: checklist.completed_count(),
                total: checklist.len(),
            });
        }
        if self.report_ids.peek().is_none() {
            return Err(MroError::ReportIdsExhausted);
        }

        self.ledger
            .deduct_parts(&task.required_parts, UNITS_PER_PART)?;
        let id = self
            .report_ids
            .next_id()
            .ok_or(MroError::ReportIdsExhausted)?;

        let report = MaintenanceReport {
            id,
            date,
            aircraft: self.aircraft.clone(),
            system: task.system.clone(),
            task: task.name.clone(),
            used_parts: task.required_parts.clone(),
        };
        info!("Finalized {} as {}", task.name, report.id);
        checklist.mark_finalized();
        Ok(report)
    }

    /// Appends a finalized report to the report log.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::FileSystem`] if the log cannot be written.
    pub fn emit(&self, report: &MaintenanceReport) -> Result<()> {
        self.report_log.append(report)
    }

    /// Writes the ledger back to the stock file, if the session has one.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::FileSystem`] if the file cannot be written.
    pub fn save_stock(&self) -> Result<()> {
        match &self.stock_path {
            Some(path) => save_stock_file(&self.ledger, path),
            None => {
                debug!("No stock file configured, skipping save");
                Ok(())
            }
        }
    }
}
