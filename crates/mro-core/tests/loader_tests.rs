mod common;

use common::{Workspace, HYDRAULIC_STOCK};

#[test]
fn test_malformed_lines_are_skipped_and_counted() {
    let workspace = Workspace::new();
    workspace.write(
        "tasks.txt",
        "\
Hydraulic|Hydraulic Leak Repair|Identify leak location|O-Ring
Hydraulic|Missing parts field
# comment

Electrical|Wiring Inspection|Inspect harness,,Replace connector|
",
    );
    workspace.write(
        "stock.txt",
        "\
O-Ring|5
WrenchSet|many
HydraulicFluid
RagSet|-2
O-Ring|1
",
    );

    let session = workspace.file_session();

    let tasks = session.task_summary();
    assert_eq!(tasks.loaded, 2);
    assert_eq!(tasks.skipped, 1);
    assert!(!tasks.from_defaults);

    let stock = session.stock_summary();
    assert_eq!(stock.loaded, 2);
    assert_eq!(stock.skipped, 3);

    assert_eq!(session.ledger().quantity("O-Ring"), Some(1));
    assert_eq!(session.ledger().quantity("WrenchSet"), None);

    let wiring = session
        .select_task("Electrical", "Wiring Inspection")
        .expect("Failed to select task");
    assert_eq!(wiring.steps, vec!["Inspect harness", "Replace connector"]);
    assert!(wiring.required_parts.is_empty());
    assert_eq!(session.systems(), vec!["Hydraulic", "Electrical"]);
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let workspace = Workspace::new();
    let session = workspace.file_session();

    assert!(session.task_summary().from_defaults);
    assert!(session.stock_summary().from_defaults);
    assert_eq!(session.catalog().len(), 3);
    assert_eq!(session.ledger().quantity("ScrewSet"), Some(10));
    assert_eq!(
        session.systems(),
        vec!["Avionics", "Hydraulic", "Mechanical"]
    );
}

#[test]
fn test_unreadable_stock_source_is_an_error() {
    let workspace = Workspace::new();
    workspace.write("stock.txt", HYDRAULIC_STOCK);
    // A directory where a file is expected cannot be read as records.
    std::fs::create_dir(workspace.path("tasks.txt")).expect("Failed to create dir");

    let result = mro_core::SessionBuilder::new()
        .with_tasks_file(Some(workspace.path("tasks.txt")))
        .with_stock_file(Some(workspace.path("stock.txt")))
        .with_report_log(workspace.report_log())
        .build();
    assert!(matches!(result, Err(mro_core::MroError::FileSystem { .. })));
}
