#![allow(dead_code)]

use std::path::{Path, PathBuf};

use mro_core::{InventoryLedger, MaintenanceSession, SessionBuilder, TaskCatalog};
use tempfile::TempDir;

pub const HYDRAULIC_TASKS: &str = "\
# system|task|steps|parts
Hydraulic|Hydraulic Leak Repair|Identify leak location,Replace damaged O-rings,Test hydraulic pressure|O-Ring,HydraulicFluid,WrenchSet
Avionics|Avionics Diagnostic Check|Run diagnostic software|DiagnosticKit
";

pub const HYDRAULIC_STOCK: &str = "\
O-Ring|5
HydraulicFluid|3
WrenchSet|2
DiagnosticKit|0
";

/// Scratch directory holding task, stock and report files.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    pub fn report_log(&self) -> PathBuf {
        self.path("maintenance_reports.txt")
    }

    /// Session reading `tasks.txt` and `stock.txt` from the workspace.
    pub fn file_session(&self) -> MaintenanceSession {
        SessionBuilder::new()
            .with_tasks_file(Some(self.path("tasks.txt")))
            .with_stock_file(Some(self.path("stock.txt")))
            .with_report_log(self.report_log())
            .build()
            .expect("Failed to create session")
    }

    /// Session over an in-memory catalog and ledger.
    pub fn memory_session(
        &self,
        catalog: TaskCatalog,
        ledger: InventoryLedger,
    ) -> MaintenanceSession {
        SessionBuilder::new()
            .with_catalog(catalog)
            .with_ledger(ledger)
            .with_report_log(self.report_log())
            .build()
            .expect("Failed to create session")
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}
