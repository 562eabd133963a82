//! Interactive checklist walkthrough.
//!
//! Reads one command per line and applies it to an [`OrderedChecklist`]:
//!
//! | Input          | Effect                                   |
//! |----------------|------------------------------------------|
//! | empty, `y`     | complete the next eligible step          |
//! | `N`            | attempt step `N` (1-based)               |
//! | `q`, EOF       | abandon the checklist                    |
//!
//! Rejected attempts are reported and the prompt repeats.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use mro_core::{OperationStatus, OrderedChecklist};

/// How a walkthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Abandoned,
}

enum Command {
    Next,
    Step(usize),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" | "done" => Command::Next,
        "q" | "quit" | "abort" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if n > 0 => Command::Step(n - 1),
            _ => Command::Unknown,
        },
    }
}

/// Drives `checklist` from `input` until it completes or is abandoned,
/// writing prompts and feedback to `out`.
pub fn walk<R, W>(checklist: &mut OrderedChecklist, mut input: R, mut out: W) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    while let Some(next) = checklist.next_eligible() {
        let step = &checklist.task().steps[next];
        write!(out, "Step {}/{}: {step} [Enter=done, q=quit] > ", next + 1, checklist.len())?;
        out.flush().context("Failed to write prompt")?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(Outcome::Abandoned);
        }

        let attempt = match parse_command(&line) {
            Command::Next => checklist.complete_next().map(|_| ()),
            Command::Step(index) => checklist.complete_step(index),
            Command::Quit => return Ok(Outcome::Abandoned),
            Command::Unknown => {
                write!(
                    out,
                    "{}",
                    OperationStatus::failure(format!("Unrecognized input '{}'", line.trim()))
                )?;
                continue;
            }
        };
        if let Err(e) = attempt {
            write!(out, "{}", OperationStatus::failure(e.to_string()))?;
        }
    }
    Ok(Outcome::Completed)
}
