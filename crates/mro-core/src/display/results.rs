//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use serde::Serialize;

use crate::models::MaintenanceReport;

/// Outcome of finalizing a task: confirmation line plus the full report.
///
/// ```rust
/// use jiff::civil::date;
/// use mro_core::{display::FinalizeResult, models::{MaintenanceReport, ReportId}};
///
/// let report = MaintenanceReport {
///     id: ReportId(1001),
///     date: date(2026, 10, 16),
///     aircraft: None,
///     system: "Hydraulic".to_string(),
///     task: "Hydraulic Leak Repair".to_string(),
///     used_parts: vec!["O-Ring".to_string()],
/// };
/// let output = FinalizeResult::new(report).to_string();
/// assert!(output.starts_with("Finalized 'Hydraulic Leak Repair' as RPT-1001"));
/// ```
#[derive(Serialize)]
#[serde(transparent)]
pub struct FinalizeResult {
    pub report: MaintenanceReport,
}

impl FinalizeResult {
    pub fn new(report: MaintenanceReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for FinalizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Finalized '{}' as {}",
            self.report.task, self.report.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.report)
    }
}

/// Outcome of adding stock for one part.
#[derive(Serialize)]
pub struct RestockResult {
    pub part: String,
    pub added: u32,
    pub on_hand: u32,
}

impl fmt::Display for RestockResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added {} x {}; {} now on hand.",
            self.added, self.part, self.on_hand
        )
    }
}
