//! Ordered task checklists.
//!
//! An [`OrderedChecklist`] walks the steps of one [`Task`] strictly in order.
//! Exactly one step is eligible at a time; completing it makes the next one
//! eligible. Rejected transitions report an error and leave the checklist
//! untouched.
//!
//! ```rust
//! use mro_core::{MroError, OrderedChecklist, models::{StepState, Task}};
//!
//! let task = Task {
//!     id: "T003".to_string(),
//!     name: "Landing Gear Lubrication".to_string(),
//!     system: "Mechanical".to_string(),
//!     steps: vec!["Clean joints".to_string(), "Apply grease".to_string()],
//!     required_parts: vec![],
//! };
//!
//! let mut checklist = OrderedChecklist::new(task);
//! assert!(matches!(checklist.complete_step(1), Err(MroError::OutOfOrder { .. })));
//!
//! checklist.complete_step(0)?;
//! assert_eq!(checklist.state(1), Some(StepState::Eligible));
//! checklist.complete_step(1)?;
//! assert!(checklist.is_complete());
//! # Ok::<(), mro_core::MroError>(())
//! ```

use log::debug;

use crate::{
    error::{MroError, Result},
    models::{StepState, Task},
};

/// Completion state of one task's steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedChecklist {
    task: Task,
    done: Vec<bool>,
    /// Index of the single eligible step; equals `done.len()` once complete.
    cursor: usize,
    /// Set once the checklist has produced a report.
    finalized: bool,
}

impl OrderedChecklist {
    /// Creates a fresh checklist with step 0 eligible.
    pub fn new(task: Task) -> Self {
        let done = vec![false; task.steps.len()];
        Self {
            task,
            done,
            cursor: 0,
            finalized: false,
        }
    }

    /// The task this checklist is bound to.
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Number of steps marked done.
    pub fn completed_count(&self) -> usize {
        self.cursor
    }

    /// Index of the step that may be completed next, `None` once complete.
    pub fn next_eligible(&self) -> Option<usize> {
        (self.cursor < self.done.len()).then_some(self.cursor)
    }

    /// State of step `index`, `None` if the index is out of range.
    pub fn state(&self, index: usize) -> Option<StepState> {
        let done = *self.done.get(index)?;
        Some(if done {
            StepState::Done
        } else if index == self.cursor {
            StepState::Eligible
        } else {
            StepState::Pending
        })
    }

    /// Steps paired with their current state, in order.
    pub fn steps(&self) -> impl Iterator<Item = (&str, StepState)> + '_ {
        self.task
            .steps
            .iter()
            .enumerate()
            .map(move |(i, step)| (step.as_str(), self.state(i).unwrap_or(StepState::Pending)))
    }

    /// Marks step `index` as done.
    ///
    /// # Errors
    ///
    /// - [`MroError::AlreadyComplete`] with `step: None` once every step is
    ///   done, or with the step index if that step is already done.
    /// - [`MroError::OutOfOrder`] for any step that is not yet eligible,
    ///   including indices past the end of the checklist.
    pub fn complete_step(&mut self, index: usize) -> Result<()> {
        if self.is_complete() {
            return Err(MroError::AlreadyComplete { step: None });
        }
        if self.done.get(index).copied().unwrap_or(false) {
            return Err(MroError::AlreadyComplete { step: Some(index) });
        }
        if index != self.cursor {
            return Err(MroError::OutOfOrder {
                step: index,
                expected: self.cursor,
            });
        }

        self.done[index] = true;
        self.cursor += 1;
        debug!(
            "Task {}: step {}/{} done",
            self.task.id,
            self.cursor,
            self.done.len()
        );
        Ok(())
    }

    /// Completes the currently eligible step and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`MroError::AlreadyComplete`] when no step is left.
    pub fn complete_next(&mut self) -> Result<usize> {
        let index = self
            .next_eligible()
            .ok_or(MroError::AlreadyComplete { step: None })?;
        self.complete_step(index)?;
        Ok(index)
    }

    /// True iff every step is done.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.done.len()
    }

    /// True once a session has finalized this checklist into a report.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub(crate) fn mark_finalized(&mut self) {
        self.finalized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_step_task() -> Task {
        Task {
            id: "T100".to_string(),
            name: "Brake Inspection".to_string(),
            system: "Mechanical".to_string(),
            steps: vec![
                "Chock wheels".to_string(),
                "Inspect brake pads".to_string(),
                "Record wear".to_string(),
            ],
            required_parts: vec![],
        }
    }

    #[test]
    fn test_initial_states() {
        let checklist = OrderedChecklist::new(three_step_task());
        assert_eq!(checklist.state(0), Some(StepState::Eligible));
        assert_eq!(checklist.state(1), Some(StepState::Pending));
        assert_eq!(checklist.state(2), Some(StepState::Pending));
        assert_eq!(checklist.state(3), None);
        assert_eq!(checklist.next_eligible(), Some(0));
        assert!(!checklist.is_complete());
    }

    #[test]
    fn test_in_order_completion() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        for i in 0..3 {
            assert!(!checklist.is_complete());
            checklist.complete_step(i).expect("in-order completion");
            assert_eq!(checklist.state(i), Some(StepState::Done));
        }
        assert!(checklist.is_complete());
        assert_eq!(checklist.next_eligible(), None);
        assert_eq!(checklist.completed_count(), 3);
    }

    #[test]
    fn test_out_of_order_is_rejected_and_recoverable() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        let before = checklist.clone();

        let err = checklist.complete_step(1).unwrap_err();
        assert!(matches!(
            err,
            MroError::OutOfOrder {
                step: 1,
                expected: 0
            }
        ));
        assert_eq!(checklist, before);

        checklist.complete_step(0).expect("step 0");
        checklist.complete_step(1).expect("step 1");
        checklist.complete_step(2).expect("step 2");
        assert!(checklist.is_complete());
    }

    #[test]
    fn test_skipping_ahead_is_rejected() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        checklist.complete_step(0).expect("step 0");

        let err = checklist.complete_step(2).unwrap_err();
        assert!(matches!(
            err,
            MroError::OutOfOrder {
                step: 2,
                expected: 1
            }
        ));
        assert_eq!(checklist.state(1), Some(StepState::Eligible));
        assert_eq!(checklist.state(2), Some(StepState::Pending));
    }

    #[test]
    fn test_repeat_completion_is_rejected() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        checklist.complete_step(0).expect("step 0");
        let before = checklist.clone();

        let err = checklist.complete_step(0).unwrap_err();
        assert!(matches!(err, MroError::AlreadyComplete { step: Some(0) }));
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        let err = checklist.complete_step(7).unwrap_err();
        assert!(matches!(
            err,
            MroError::OutOfOrder {
                step: 7,
                expected: 0
            }
        ));
        assert_eq!(checklist.completed_count(), 0);
    }

    #[test]
    fn test_finalized_checklist_rejects_everything() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        while checklist.complete_next().is_ok() {}
        assert!(checklist.is_complete());

        for i in [0, 1, 2, 3] {
            let err = checklist.complete_step(i).unwrap_err();
            assert!(matches!(err, MroError::AlreadyComplete { step: None }));
        }
        assert!(matches!(
            checklist.complete_next(),
            Err(MroError::AlreadyComplete { step: None })
        ));
    }

    #[test]
    fn test_complete_next_returns_index() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        assert_eq!(checklist.complete_next().expect("next"), 0);
        assert_eq!(checklist.complete_next().expect("next"), 1);
        assert_eq!(checklist.next_eligible(), Some(2));
    }

    #[test]
    fn test_task_without_steps_is_complete() {
        let mut task = three_step_task();
        task.steps.clear();
        let mut checklist = OrderedChecklist::new(task);
        assert!(checklist.is_empty());
        assert!(checklist.is_complete());
        assert!(matches!(
            checklist.complete_step(0),
            Err(MroError::AlreadyComplete { step: None })
        ));
    }

    #[test]
    fn test_steps_iterator_reports_states() {
        let mut checklist = OrderedChecklist::new(three_step_task());
        checklist.complete_step(0).expect("step 0");
        let states: Vec<StepState> = checklist.steps().map(|(_, s)| s).collect();
        assert_eq!(
            states,
            vec![StepState::Done, StepState::Eligible, StepState::Pending]
        );
    }
}
