//! Builder for creating and configuring MaintenanceSession instances.

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::MaintenanceSession;
use crate::{
    catalog::{
        parser::{load_stock_file, load_tasks_file},
        LoadSummary, TaskCatalog,
    },
    error::{MroError, Result},
    ledger::InventoryLedger,
    report_log::{ReportIdGenerator, ReportLog, REPORT_ID_BASE},
};

const TASKS_FILE: &str = "tasks.txt";
const STOCK_FILE: &str = "stock.txt";
const REPORT_LOG_FILE: &str = "maintenance_reports.txt";

/// Builder for creating and configuring MaintenanceSession instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    tasks_file: Option<PathBuf>,
    stock_file: Option<PathBuf>,
    report_log: Option<PathBuf>,
    catalog: Option<TaskCatalog>,
    ledger: Option<InventoryLedger>,
    aircraft: Option<String>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the task catalog file.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/mro/tasks.txt`. A missing file
    /// falls back to the built-in catalog.
    pub fn with_tasks_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.tasks_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the stock file, read at build time and written by
    /// [`MaintenanceSession::save_stock`].
    ///
    /// If not specified, uses `$XDG_DATA_HOME/mro/stock.txt`. A missing file
    /// falls back to the built-in stock.
    pub fn with_stock_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.stock_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the report log file.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/mro/maintenance_reports.txt`.
    pub fn with_report_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_log = Some(path.into());
        self
    }

    /// Uses an in-memory catalog instead of reading a task file.
    pub fn with_catalog(mut self, catalog: TaskCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Uses an in-memory ledger instead of reading a stock file.
    ///
    /// The session only saves stock if a stock file was also set.
    pub fn with_ledger(mut self, ledger: InventoryLedger) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Sets the aircraft recorded on reports.
    pub fn with_aircraft(mut self, aircraft: Option<String>) -> Self {
        self.aircraft = aircraft;
        self
    }

    /// Loads every source and builds the session.
    ///
    /// # Errors
    ///
    /// Returns `MroError::XdgDirectory` if a default path cannot be resolved
    /// Returns `MroError::FileSystem` if an existing source cannot be read
    pub fn build(self) -> Result<MaintenanceSession> {
        let (catalog, task_summary) = match self.catalog {
            Some(catalog) => {
                let summary = in_memory_summary(catalog.len());
                (catalog, summary)
            }
            None => {
                let path = resolve(self.tasks_file, TASKS_FILE)?;
                load_tasks_file(&path)?
            }
        };

        let (ledger, stock_summary, stock_path) = match self.ledger {
            Some(ledger) => {
                let summary = in_memory_summary(ledger.len());
                (ledger, summary, self.stock_file)
            }
            None => {
                let path = resolve(self.stock_file, STOCK_FILE)?;
                let (ledger, summary) = load_stock_file(&path)?;
                (ledger, summary, Some(path))
            }
        };

        let report_log = ReportLog::new(resolve(self.report_log, REPORT_LOG_FILE)?);
        let report_ids =
            ReportIdGenerator::resume_after(REPORT_ID_BASE, report_log.last_report_id()?);

        match report_ids.peek() {
            Some(next) => info!(
                "Session ready: tasks {task_summary}; stock {stock_summary}; {next} next"
            ),
            None => warn!("Report log {} has exhausted report ids", report_log.path().display()),
        }

        let mut session = MaintenanceSession {
            catalog,
            ledger,
            report_log,
            report_ids,
            stock_path,
            aircraft: None,
            task_summary,
            stock_summary,
        };
        session.set_aircraft(self.aircraft);
        Ok(session)
    }

    /// Returns the default path for a data file following XDG Base Directory
    /// specification.
    fn default_data_file(name: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("mro")
            .place_data_file(name)
            .map_err(|e| MroError::XdgDirectory(e.to_string()))
    }
}

fn resolve(explicit: Option<PathBuf>, name: &str) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => SessionBuilder::default_data_file(name),
    }
}

fn in_memory_summary(loaded: usize) -> LoadSummary {
    LoadSummary {
        loaded,
        skipped: 0,
        from_defaults: false,
    }
}
