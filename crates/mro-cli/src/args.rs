//! Command-line argument definitions using clap's derive API.
//!
//! Global flags configure where the session reads and writes its data;
//! subcommands map one-to-one onto session operations.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Aircraft maintenance workbench
///
/// Look up maintenance tasks by aircraft system, walk their checklists in
/// order, deduct the parts they consume and log a maintenance report for
/// every completed task.
#[derive(Parser)]
#[command(version, about, name = "mro")]
pub struct Args {
    /// Task catalog file. Defaults to $XDG_DATA_HOME/mro/tasks.txt
    #[arg(long, global = true)]
    pub tasks_file: Option<PathBuf>,

    /// Stock file, updated after restocking or completing a task. Defaults to
    /// $XDG_DATA_HOME/mro/stock.txt
    #[arg(long, global = true)]
    pub stock_file: Option<PathBuf>,

    /// Report log file. Defaults to
    /// $XDG_DATA_HOME/mro/maintenance_reports.txt
    #[arg(long, global = true)]
    pub report_log: Option<PathBuf>,

    /// Aircraft recorded on maintenance reports. `mro aircraft` lists the
    /// standard types: Boeing 737, Airbus A320, Gulfstream G550
    #[arg(long, global = true)]
    pub aircraft: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print machine-readable JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, `systems` is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// List system categories
    #[command(alias = "sys")]
    Systems,
    /// List maintenance tasks
    #[command(aliases = ["t", "ls"])]
    Tasks(TasksArgs),
    /// Show a task's steps and part availability
    #[command(alias = "s")]
    Show(TaskRef),
    /// Show current stock
    Stock,
    /// Add stock for a part
    #[command(alias = "add")]
    Restock(RestockArgs),
    /// Walk a task's checklist and log a report when it completes
    #[command(alias = "r")]
    Run(RunArgs),
    /// Print the maintenance report log
    Reports,
    /// List the standard aircraft types
    Aircraft,
}

/// List tasks, optionally only those of one system
#[derive(ClapArgs)]
pub struct TasksArgs {
    /// System category to filter by (e.g. Hydraulic)
    pub system: Option<String>,
}

/// A task addressed by system and id or name
#[derive(ClapArgs)]
pub struct TaskRef {
    /// System category the task belongs to
    pub system: String,
    /// Task id (e.g. T002) or task name
    pub task: String,
}

/// Add stock for a part
#[derive(ClapArgs)]
pub struct RestockArgs {
    /// Part identifier (e.g. O-Ring)
    pub part: String,
    /// Units to add
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,
}

/// Run a task's checklist
#[derive(ClapArgs)]
pub struct RunArgs {
    #[command(flatten)]
    pub task: TaskRef,
    /// Complete every step in order without prompting
    #[arg(short, long)]
    pub yes: bool,
}
