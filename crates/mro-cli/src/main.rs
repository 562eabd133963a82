//! MRO workbench CLI
//!
//! Command-line front end for aircraft maintenance tasks, checklists and
//! parts inventory.

mod args;
mod cli;
mod renderer;
mod walkthrough;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mro_core::SessionBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Args {
        tasks_file,
        stock_file,
        report_log,
        aircraft,
        no_color,
        json,
        command,
    } = Args::parse();

    let mut builder = SessionBuilder::new()
        .with_tasks_file(tasks_file)
        .with_stock_file(stock_file)
        .with_aircraft(aircraft);
    if let Some(path) = report_log {
        builder = builder.with_report_log(path);
    }
    let session = builder.build().context("Failed to initialize session")?;

    info!("MRO workbench started");

    let mut cli = Cli::new(session, TerminalRenderer::new(!no_color), json);
    match command {
        None | Some(Systems) => cli.list_systems(),
        Some(Tasks(args)) => cli.list_tasks(args),
        Some(Show(args)) => cli.show_task(args),
        Some(Stock) => cli.show_stock(),
        Some(Restock(args)) => cli.restock(args),
        // JSON output owns stdout, so prompts move to stderr.
        Some(Run(args)) if json => cli.run_task(args, io::stdin().lock(), io::stderr()),
        Some(Run(args)) => cli.run_task(args, io::stdin().lock(), io::stdout()),
        Some(Reports) => cli.show_reports(),
        Some(Aircraft) => cli.list_aircraft(),
    }
}
