//! Append-only maintenance report log and report id generation.
//!
//! Each finalized report is serialized as a fixed text block and appended to
//! the log file. The file is opened in append mode for every write and never
//! truncated.

use std::{
    fmt,
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{IoResultExt, Result},
    models::{MaintenanceReport, ReportId},
};

const BLOCK_HEADER: &str = "=== Maintenance Report ===";
const BLOCK_FOOTER: &str = "==========================";

/// Counter seed; the first report of a fresh log is `RPT-1001`.
pub const REPORT_ID_BASE: u32 = 1000;

/// The text block written to the log for one report.
pub struct ReportBlock<'a>(pub &'a MaintenanceReport);

impl fmt::Display for ReportBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "{BLOCK_HEADER}")?;
        writeln!(f, "Report ID: {}", report.id)?;
        writeln!(f, "Date: {}", report.date)?;
        if let Some(aircraft) = &report.aircraft {
            writeln!(f, "Aircraft: {aircraft}")?;
        }
        writeln!(f, "System: {}", report.system)?;
        writeln!(f, "Completed Task: {}", report.task)?;
        writeln!(f, "Used Parts:")?;
        for part in &report.used_parts {
            writeln!(f, "  - {part}")?;
        }
        writeln!(f, "{BLOCK_FOOTER}")?;
        writeln!(f)
    }
}

/// Append-only report log backed by a text file.
#[derive(Debug, Clone)]
pub struct ReportLog {
    path: PathBuf,
}

impl ReportLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one report block, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MroError::FileSystem`] if the log cannot be opened or
    /// written.
    pub fn append(&self, report: &MaintenanceReport) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).fs_context(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .fs_context(&self.path)?;
        write!(file, "{}", ReportBlock(report)).fs_context(&self.path)?;
        debug!("Appended {} to {}", report.id, self.path.display());
        Ok(())
    }

    /// Full log contents; empty if nothing has been logged yet.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MroError::FileSystem`] if an existing log cannot be
    /// read.
    pub fn read_all(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e).fs_context(&self.path),
        }
    }

    /// Highest report id recorded in the log, if any.
    ///
    /// # Errors
    ///
    /// Propagates read failures from [`ReportLog::read_all`].
    pub fn last_report_id(&self) -> Result<Option<ReportId>> {
        Ok(self
            .read_all()?
            .lines()
            .filter_map(|line| line.strip_prefix("Report ID:"))
            .filter_map(|id| id.trim().parse::<ReportId>().ok())
            .max())
    }
}

/// Monotonic report id source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportIdGenerator {
    last: u32,
}

impl ReportIdGenerator {
    /// Starts a counter whose first id is `base + 1`.
    pub fn new(base: u32) -> Self {
        Self { last: base }
    }

    /// Starts past both the base and an id already in use.
    pub fn resume_after(base: u32, last_used: Option<ReportId>) -> Self {
        let last = last_used.map_or(base, |ReportId(n)| n.max(base));
        Self { last }
    }

    /// The id the next call to [`ReportIdGenerator::next_id`] returns, `None`
    /// once the counter is exhausted.
    pub fn peek(&self) -> Option<ReportId> {
        self.last.checked_add(1).map(ReportId)
    }

    /// Consumes and returns the next id, `None` once the counter is exhausted.
    pub fn next_id(&mut self) -> Option<ReportId> {
        let id = self.peek()?;
        self.last = id.0;
        Some(id)
    }
}

impl Default for ReportIdGenerator {
    fn default() -> Self {
        Self::new(REPORT_ID_BASE)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;

    fn report(id: u32, aircraft: Option<&str>) -> MaintenanceReport {
        MaintenanceReport {
            id: ReportId(id),
            date: date(2026, 10, 16),
            aircraft: aircraft.map(ToString::to_string),
            system: "Hydraulic".to_string(),
            task: "Hydraulic Leak Repair".to_string(),
            used_parts: vec!["O-Ring".to_string(), "WrenchSet".to_string()],
        }
    }

    #[test]
    fn test_report_block_format() {
        let text = ReportBlock(&report(1001, Some("Boeing 737"))).to_string();
        assert_eq!(
            text,
            "=== Maintenance Report ===\n\
             Report ID: RPT-1001\n\
             Date: 2026-10-16\n\
             Aircraft: Boeing 737\n\
             System: Hydraulic\n\
             Completed Task: Hydraulic Leak Repair\n\
             Used Parts:\n  - O-Ring\n  - WrenchSet\n\
             ==========================\n\n"
        );
    }

    #[test]
    fn test_report_block_omits_missing_aircraft() {
        let text = ReportBlock(&report(1001, None)).to_string();
        assert!(!text.contains("Aircraft:"));
    }

    #[test]
    fn test_append_never_truncates() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log = ReportLog::new(temp_dir.path().join("logs/maintenance_reports.txt"));

        assert_eq!(log.read_all().expect("read empty"), "");
        assert_eq!(log.last_report_id().expect("scan empty"), None);

        log.append(&report(1001, None)).expect("append first");
        log.append(&report(1002, None)).expect("append second");

        let contents = log.read_all().expect("read");
        assert_eq!(contents.matches(BLOCK_HEADER).count(), 2);
        assert!(contents.find("RPT-1001") < contents.find("RPT-1002"));
        assert_eq!(log.last_report_id().expect("scan"), Some(ReportId(1002)));
    }

    #[test]
    fn test_generator_sequence() {
        let mut ids = ReportIdGenerator::default();
        assert_eq!(ids.peek(), Some(ReportId(1001)));
        assert_eq!(ids.next_id(), Some(ReportId(1001)));
        assert_eq!(ids.next_id(), Some(ReportId(1002)));
    }

    #[test]
    fn test_generator_stops_at_max() {
        let mut ids = ReportIdGenerator::resume_after(REPORT_ID_BASE, Some(ReportId(u32::MAX - 1)));
        assert_eq!(ids.next_id(), Some(ReportId(u32::MAX)));
        assert_eq!(ids.peek(), None);
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.peek(), None);
    }

    #[test]
    fn test_generator_resumes_past_logged_ids() {
        let mut ids = ReportIdGenerator::resume_after(REPORT_ID_BASE, Some(ReportId(1041)));
        assert_eq!(ids.next_id(), Some(ReportId(1042)));

        // Ids below the base never pull the counter backwards.
        let mut ids = ReportIdGenerator::resume_after(REPORT_ID_BASE, Some(ReportId(7)));
        assert_eq!(ids.next_id(), Some(ReportId(1001)));
    }
}
