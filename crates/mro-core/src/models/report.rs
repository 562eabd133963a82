//! Maintenance report model and report identifiers.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Prefix shared by every report identifier.
pub const REPORT_ID_PREFIX: &str = "RPT-";

/// Numeric report identifier, displayed as `RPT-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ReportId(pub u32);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPORT_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_prefix(REPORT_ID_PREFIX)
            .and_then(|n| n.parse().ok())
            .map(ReportId)
            .ok_or_else(|| format!("Invalid report id: {s}"))
    }
}

impl From<ReportId> for String {
    fn from(id: ReportId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ReportId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Record of a finalized maintenance task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaintenanceReport {
    /// Identifier unique within the report log
    pub id: ReportId,

    /// Local calendar date the task was finalized
    pub date: Date,

    /// Aircraft serviced, when one was chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,

    /// System category of the completed task
    pub system: String,

    /// Name of the completed task
    pub task: String,

    /// Parts deducted from stock, one entry per unit
    pub used_parts: Vec<String>,
}
