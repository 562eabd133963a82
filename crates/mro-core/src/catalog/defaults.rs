//! Built-in catalog, stock and aircraft used when no source files exist.

use super::{TaskCatalog, TaskRecord};
use crate::ledger::InventoryLedger;

/// Aircraft offered for selection when none is configured.
pub const AIRCRAFT_TYPES: [&str; 3] = ["Boeing 737", "Airbus A320", "Gulfstream G550"];

const TASKS: [(&str, &str, &[&str], &[&str]); 3] = [
    (
        "Avionics",
        "Avionics Diagnostic Check",
        &[
            "Power off the avionics unit",
            "Remove protective covers",
            "Run diagnostic software",
            "Replace faulty modules if detected",
            "Reassemble and test system",
        ],
        &["AvionicsModule", "ScrewSet", "DiagnosticKit"],
    ),
    (
        "Hydraulic",
        "Hydraulic Leak Repair",
        &[
            "Identify leak location",
            "Drain hydraulic fluid from reservoir",
            "Replace damaged O-rings",
            "Refill hydraulic fluid",
            "Test hydraulic pressure",
        ],
        &["O-Ring", "HydraulicFluid", "WrenchSet"],
    ),
    (
        "Mechanical",
        "Landing Gear Lubrication",
        &[
            "Lift aircraft and secure",
            "Clean landing gear joints",
            "Apply lubrication grease",
            "Lower aircraft and perform operational check",
        ],
        &["LubricationGrease", "RagSet"],
    ),
];

const STOCK: [(&str, u32); 8] = [
    ("AvionicsModule", 2),
    ("ScrewSet", 10),
    ("DiagnosticKit", 1),
    ("O-Ring", 5),
    ("HydraulicFluid", 3),
    ("WrenchSet", 2),
    ("LubricationGrease", 4),
    ("RagSet", 10),
];

/// The built-in task catalog (`T001`..`T003`).
pub fn catalog() -> TaskCatalog {
    let mut catalog = TaskCatalog::new();
    for (system, name, steps, parts) in TASKS {
        catalog.push_record(TaskRecord {
            system: system.to_string(),
            name: name.to_string(),
            steps: steps.iter().map(ToString::to_string).collect(),
            required_parts: parts.iter().map(ToString::to_string).collect(),
        });
    }
    catalog
}

/// The built-in starting stock.
pub fn ledger() -> InventoryLedger {
    STOCK
        .iter()
        .map(|&(part, quantity)| (part.to_string(), quantity))
        .collect()
}
