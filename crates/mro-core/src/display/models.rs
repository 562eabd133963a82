//! Display implementations for domain models.

use std::fmt;

use crate::{
    checklist::OrderedChecklist,
    models::{MaintenanceReport, Part, Shortage, StepState, Task},
};

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.quantity)
    }
}

impl fmt::Display for Shortage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.available {
            Some(on_hand) => write!(f, "{} (need {}, have {on_hand})", self.part, self.requested),
            None => write!(f, "{} (need {}, not stocked)", self.part, self.requested),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- System: {}", self.system)?;

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        if self.steps.is_empty() {
            writeln!(f, "No steps in this task.")?;
        }
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }

        writeln!(f, "\n## Required Parts")?;
        writeln!(f)?;
        if self.required_parts.is_empty() {
            writeln!(f, "No parts required.")?;
        }
        for part in &self.required_parts {
            writeln!(f, "- {part}")?;
        }
        Ok(())
    }
}

impl fmt::Display for OrderedChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}/{})",
            self.task().name,
            self.completed_count(),
            self.len()
        )?;
        writeln!(f)?;
        for (i, (step, state)) in self.steps().enumerate() {
            writeln!(f, "{}. {} {step}", i + 1, state.marker())?;
        }
        Ok(())
    }
}

impl fmt::Display for MaintenanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Maintenance Report {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Date**: {}", self.date)?;
        if let Some(aircraft) = &self.aircraft {
            writeln!(f, "- **Aircraft**: {aircraft}")?;
        }
        writeln!(f, "- **System**: {}", self.system)?;
        writeln!(f, "- **Completed Task**: {}", self.task)?;

        writeln!(f, "\n## Used Parts")?;
        writeln!(f)?;
        if self.used_parts.is_empty() {
            writeln!(f, "No parts used.")?;
        }
        for part in &self.used_parts {
            writeln!(f, "- {part}")?;
        }
        Ok(())
    }
}
