//! Command handlers.
//!
//! [`Cli`] owns the maintenance session for one invocation and turns each
//! subcommand into session calls, rendering the result as markdown through
//! the [`TerminalRenderer`] or as JSON when `--json` is set.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::info;
use mro_core::{
    catalog::defaults, display::to_json, FinalizeResult, MaintenanceSession, NameList,
    OperationStatus, PartsCheck, RestockResult, StockSnapshot, TaskList,
};
use serde::Serialize;
use serde_json::json;

use crate::{
    args::{RestockArgs, RunArgs, TaskRef, TasksArgs},
    renderer::TerminalRenderer,
    walkthrough::{self, Outcome},
};

/// Handler for CLI commands
pub struct Cli {
    session: MaintenanceSession,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(session: MaintenanceSession, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            session,
            renderer,
            json,
        }
    }

    fn output<T: Serialize + ?Sized>(&self, value: &T, markdown: &str) -> Result<()> {
        if self.json {
            println!("{}", to_json(value)?);
            Ok(())
        } else {
            self.renderer.render(markdown)
        }
    }

    pub fn list_systems(&self) -> Result<()> {
        let systems = NameList(self.session.systems());
        self.output(&systems, &format!("# Systems\n\n{systems}"))
    }

    pub fn list_aircraft(&self) -> Result<()> {
        let aircraft = NameList(defaults::AIRCRAFT_TYPES.to_vec());
        let mut markdown = format!("# Aircraft\n\n{aircraft}");
        if let Some(selected) = self.session.aircraft() {
            markdown.push_str(&format!("\nSelected: {selected}\n"));
        }
        self.output(&aircraft, &markdown)
    }

    pub fn list_tasks(&self, args: TasksArgs) -> Result<()> {
        let (title, tasks) = match &args.system {
            Some(system) => (
                format!("# {system} Tasks"),
                self.session
                    .tasks_for_system(system)
                    .context("Failed to list tasks")?,
            ),
            None => (
                "# Tasks".to_string(),
                self.session.catalog().tasks().iter().collect(),
            ),
        };
        let tasks = TaskList(tasks);
        self.output(&tasks, &format!("{title}\n\n{tasks}"))
    }

    pub fn show_task(&self, args: TaskRef) -> Result<()> {
        let task = self
            .session
            .select_task(&args.system, &args.task)
            .context("Failed to find task")?;
        let check = PartsCheck(self.session.missing_parts(task));
        let value = json!({ "task": task, "missing_parts": check });
        self.output(&value, &format!("{task}\n{check}"))
    }

    pub fn show_stock(&self) -> Result<()> {
        let stock = StockSnapshot(self.session.ledger().snapshot());
        self.output(&stock, &format!("# Stock\n\n{stock}"))
    }

    pub fn restock(&mut self, args: RestockArgs) -> Result<()> {
        let on_hand = self
            .session
            .restock(&args.part, args.quantity)
            .context("Failed to restock")?;
        self.session.save_stock().context("Failed to save stock")?;
        let result = RestockResult {
            part: args.part.trim().to_string(),
            added: args.quantity,
            on_hand,
        };
        self.output(&result, &result.to_string())
    }

    /// Walks the task's checklist, then finalizes, logs the report and saves
    /// stock. Prompts go to `out`. Abandoning the checklist changes nothing.
    pub fn run_task<R, W>(&mut self, args: RunArgs, input: R, mut out: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let task = self
            .session
            .select_task(&args.task.system, &args.task.task)
            .context("Failed to find task")?
            .clone();

        let check = PartsCheck(self.session.missing_parts(&task));
        if !check.is_ready() {
            self.renderer.render(&check.to_string())?;
            bail!("Cannot start '{}': required parts are not in stock", task.name);
        }

        let mut checklist = self.session.begin_checklist(&task);
        if args.yes {
            while !checklist.is_complete() {
                checklist.complete_next()?;
            }
        } else {
            writeln!(out, "{} ({}): {} step(s)", task.name, task.id, checklist.len())?;
            if walkthrough::walk(&mut checklist, input, &mut out)? == Outcome::Abandoned {
                info!("Checklist for {} abandoned", task.id);
                let status = OperationStatus::success(format!(
                    "Checklist for '{}' abandoned; no parts deducted",
                    task.name
                ));
                return self.output(
                    &json!({ "abandoned": true, "task": task.id }),
                    &status.to_string(),
                );
            }
        }

        let report = self
            .session
            .finalize(&mut checklist)
            .context("Failed to finalize task")?;
        self.session
            .emit(&report)
            .with_context(|| format!("Failed to log {}; stock file left unchanged", report.id))?;
        self.session
            .save_stock()
            .with_context(|| format!("{} was logged but the stock file was not saved", report.id))?;

        if !self.json {
            self.renderer.render(&checklist.to_string())?;
            println!();
        }
        let result = FinalizeResult::new(report);
        self.output(&result, &result.to_string())
    }

    pub fn show_reports(&self) -> Result<()> {
        let log = self
            .session
            .report_log()
            .read_all()
            .context("Failed to read report log")?;
        if log.is_empty() {
            println!("No maintenance reports logged yet.");
        } else {
            print!("{log}");
        }
        Ok(())
    }
}
