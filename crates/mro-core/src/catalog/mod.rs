//! Task catalog and its record sources.
//!
//! The catalog holds every known [`Task`] grouped by aircraft system. It is
//! loaded once at startup, either from a task file (see [`parser`]) or from
//! the built-in [`defaults`], and is read-only afterwards.

pub mod defaults;
pub mod parser;

use serde::Serialize;

use crate::models::Task;

pub use parser::{LoadSummary, StockRecord, TaskRecord};

/// All tasks known to a session, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, assigning the next `T###` identifier.
    pub fn push_record(&mut self, record: TaskRecord) -> &Task {
        let id = format!("T{:03}", self.tasks.len() + 1);
        self.tasks.push(Task {
            id,
            name: record.name,
            system: record.system,
            steps: record.steps,
            required_parts: record.required_parts,
        });
        &self.tasks[self.tasks.len() - 1]
    }

    /// Adds a task that already carries an identifier.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Every task, in load order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Distinct system categories in order of first appearance.
    pub fn systems(&self) -> Vec<&str> {
        let mut systems: Vec<&str> = Vec::new();
        for task in &self.tasks {
            if !systems
                .iter()
                .any(|s| s.eq_ignore_ascii_case(&task.system))
            {
                systems.push(&task.system);
            }
        }
        systems
    }

    /// Tasks belonging to `system` (ASCII case-insensitive).
    pub fn tasks_for_system(&self, system: &str) -> Vec<&Task> {
        let system = system.trim();
        self.tasks
            .iter()
            .filter(|t| t.system.eq_ignore_ascii_case(system))
            .collect()
    }

    /// Looks up a task of `system` by id or name.
    pub fn find(&self, system: &str, key: &str) -> Option<&Task> {
        self.tasks_for_system(system)
            .into_iter()
            .find(|t| t.matches(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(system: &str, name: &str) -> TaskRecord {
        TaskRecord {
            system: system.to_string(),
            name: name.to_string(),
            steps: vec!["Step".to_string()],
            required_parts: vec![],
        }
    }

    fn sample_catalog() -> TaskCatalog {
        let mut catalog = TaskCatalog::new();
        catalog.push_record(record("Avionics", "Avionics Diagnostic Check"));
        catalog.push_record(record("Hydraulic", "Hydraulic Leak Repair"));
        catalog.push_record(record("Avionics", "Display Replacement"));
        catalog
    }

    #[test]
    fn test_push_record_assigns_sequential_ids() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T001", "T002", "T003"]);
    }

    #[test]
    fn test_systems_in_first_appearance_order() {
        assert_eq!(sample_catalog().systems(), vec!["Avionics", "Hydraulic"]);
    }

    #[test]
    fn test_tasks_for_system() {
        let catalog = sample_catalog();
        let avionics = catalog.tasks_for_system("avionics");
        assert_eq!(avionics.len(), 2);
        assert_eq!(avionics[1].name, "Display Replacement");
        assert!(catalog.tasks_for_system("Electrical").is_empty());
    }

    #[test]
    fn test_find_requires_matching_system() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.find("Avionics", "T003").map(|t| t.name.as_str()),
            Some("Display Replacement")
        );
        assert!(catalog.find("Hydraulic", "T003").is_none());
        assert!(catalog.find("Hydraulic", "hydraulic leak repair").is_some());
    }
}
