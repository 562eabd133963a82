//! Line-oriented record parsing for task and stock sources.
//!
//! Both sources share one record layout: fields separated by `|`, one record
//! per line. Blank lines and `#` comments are ignored.
//!
//! ```text
//! # tasks.txt: system|task name|step,step,...|part,part,...
//! Hydraulic|Hydraulic Leak Repair|Identify leak location,Refill hydraulic fluid|O-Ring,HydraulicFluid
//!
//! # stock.txt: part|quantity
//! O-Ring|5
//! ```
//!
//! A malformed line is skipped with a warning and counted in the returned
//! [`LoadSummary`]; the load itself still succeeds with the valid records.

use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use log::{debug, warn};

use super::{defaults, TaskCatalog};
use crate::{
    error::{IoResultExt, MroError, Result},
    ledger::InventoryLedger,
};

/// Field separator shared by both record formats.
pub const FIELD_SEPARATOR: char = '|';

/// Item separator inside the steps and parts fields.
pub const LIST_SEPARATOR: char = ',';

/// A task as read from one catalog line, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub system: String,
    pub name: String,
    pub steps: Vec<String>,
    pub required_parts: Vec<String>,
}

/// One stock line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    pub part: String,
    pub quantity: u32,
}

/// Outcome of loading a record source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records accepted
    pub loaded: usize,
    /// Malformed lines that were skipped
    pub skipped: usize,
    /// Whether the built-in defaults were used because the source was absent
    pub from_defaults: bool,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_defaults {
            write!(f, "{} built-in record(s)", self.loaded)
        } else {
            write!(
                f,
                "{} record(s) loaded, {} line(s) skipped",
                self.loaded, self.skipped
            )
        }
    }
}

fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parses one catalog line (`line_no` is 1-based, for error reporting).
///
/// # Errors
///
/// Returns [`MroError::MalformedRecord`] when the line has fewer than four
/// fields or an empty system or task name.
pub fn parse_task_record(line_no: usize, line: &str) -> Result<TaskRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < 4 {
        return Err(MroError::malformed(
            line_no,
            format_args!("expected 4 fields, found {}", fields.len()),
        ));
    }
    if fields[0].is_empty() || fields[1].is_empty() {
        return Err(MroError::malformed(line_no, "system and task name are required"));
    }

    Ok(TaskRecord {
        system: fields[0].to_string(),
        name: fields[1].to_string(),
        steps: split_list(fields[2]),
        required_parts: split_list(fields[3]),
    })
}

/// Parses one stock line.
///
/// # Errors
///
/// Returns [`MroError::MalformedRecord`] for a missing part or quantity field
/// or a quantity that is not a non-negative integer.
pub fn parse_stock_record(line_no: usize, line: &str) -> Result<StockRecord> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    let part = fields.next().filter(|p| !p.is_empty()).ok_or_else(|| {
        MroError::malformed(line_no, "missing part identifier")
    })?;
    let quantity = fields
        .next()
        .ok_or_else(|| MroError::malformed(line_no, "missing quantity"))?;
    let quantity = quantity.parse::<u32>().map_err(|e| {
        MroError::malformed(line_no, format_args!("invalid quantity '{quantity}': {e}"))
    })?;

    Ok(StockRecord {
        part: part.to_string(),
        quantity,
    })
}

/// Runs `parse` over every meaningful line, skipping the malformed ones.
fn parse_lines<R, T, F>(reader: R, mut parse: F) -> std::io::Result<(Vec<T>, usize)>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<T>,
{
    let mut records = Vec::new();
    let mut skipped = 0;
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        let line = match std::str::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping line: {}", MroError::malformed(index + 1, e));
                skipped += 1;
                continue;
            }
        };
        if is_ignorable(line) {
            continue;
        }
        match parse(index + 1, line) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping line: {e}: {line}");
                skipped += 1;
            }
        }
    }
    Ok((records, skipped))
}

/// Reads a task catalog from any buffered reader.
///
/// # Errors
///
/// Only I/O failures are errors; malformed lines are skipped.
pub fn read_tasks<R: BufRead>(reader: R) -> std::io::Result<(TaskCatalog, LoadSummary)> {
    let (records, skipped) = parse_lines(reader, parse_task_record)?;
    let mut catalog = TaskCatalog::new();
    let loaded = records.len();
    for record in records {
        catalog.push_record(record);
    }
    Ok((
        catalog,
        LoadSummary {
            loaded,
            skipped,
            from_defaults: false,
        },
    ))
}

/// Reads stock lines into a ledger. A repeated part keeps its last quantity.
///
/// # Errors
///
/// Only I/O failures are errors; malformed lines are skipped.
pub fn read_stock<R: BufRead>(reader: R) -> std::io::Result<(InventoryLedger, LoadSummary)> {
    let (records, skipped) = parse_lines(reader, parse_stock_record)?;
    let loaded = records.len();
    let mut latest: BTreeMap<String, u32> = BTreeMap::new();
    for StockRecord { part, quantity } in records {
        if let Some(previous) = latest.insert(part.clone(), quantity) {
            warn!("Duplicate stock entry for {part}: {previous} replaced by {quantity}");
        }
    }
    let ledger: InventoryLedger = latest.into_iter().collect();
    Ok((
        ledger,
        LoadSummary {
            loaded,
            skipped,
            from_defaults: false,
        },
    ))
}

/// Loads the task catalog from `path`, or the built-in catalog if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`MroError::FileSystem`] if the file exists but cannot be read.
pub fn load_tasks_file(path: &Path) -> Result<(TaskCatalog, LoadSummary)> {
    if !path.exists() {
        warn!(
            "Task file {} not found, using built-in catalog",
            path.display()
        );
        let catalog = defaults::catalog();
        let loaded = catalog.len();
        return Ok((
            catalog,
            LoadSummary {
                loaded,
                skipped: 0,
                from_defaults: true,
            },
        ));
    }

    let file = File::open(path).fs_context(path)?;
    let (catalog, summary) = read_tasks(BufReader::new(file)).fs_context(path)?;
    debug!("Loaded tasks from {}: {summary}", path.display());
    Ok((catalog, summary))
}

/// Loads stock from `path`, or the built-in stock if the file does not exist.
///
/// # Errors
///
/// Returns [`MroError::FileSystem`] if the file exists but cannot be read.
pub fn load_stock_file(path: &Path) -> Result<(InventoryLedger, LoadSummary)> {
    if !path.exists() {
        warn!(
            "Stock file {} not found, using built-in stock",
            path.display()
        );
        let ledger = defaults::ledger();
        let loaded = ledger.len();
        return Ok((
            ledger,
            LoadSummary {
                loaded,
                skipped: 0,
                from_defaults: true,
            },
        ));
    }

    let file = File::open(path).fs_context(path)?;
    let (ledger, summary) = read_stock(BufReader::new(file)).fs_context(path)?;
    debug!("Loaded stock from {}: {summary}", path.display());
    Ok((ledger, summary))
}

/// Writes the ledger in stock record format.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_stock<W: Write>(ledger: &InventoryLedger, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "# part{FIELD_SEPARATOR}quantity")?;
    for part in ledger.snapshot() {
        writeln!(writer, "{}{FIELD_SEPARATOR}{}", part.id, part.quantity)?;
    }
    writer.flush()
}

/// Replaces the stock file at `path` with the ledger's current contents.
///
/// The new contents are written to a sibling file first and then renamed
/// over `path`.
///
/// # Errors
///
/// Returns [`MroError::FileSystem`] if the file cannot be written.
pub fn save_stock_file(ledger: &InventoryLedger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).fs_context(parent)?;
    }
    let staging = path.with_extension("tmp");
    let file = File::create(&staging).fs_context(&staging)?;
    write_stock(ledger, std::io::BufWriter::new(file)).fs_context(&staging)?;
    std::fs::rename(&staging, path).fs_context(path)?;
    debug!("Saved {} stock entries to {}", ledger.len(), path.display());
    Ok(())
}
