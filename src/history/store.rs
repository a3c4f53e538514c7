//! Append-only conversion history store.
//!
//! One JSON object per line. A structured record avoids the ambiguity of a
//! free-text separator when a unit name or value could contain it, and reads
//! back tolerantly: malformed lines are skipped with a warning rather than
//! failing the whole load.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::engine::format_magnitude;

/// A single logged conversion, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: DateTime<Local>,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl ConversionRecord {
    pub fn new(value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        Self {
            timestamp: Local::now(),
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
        }
    }

    /// Human-readable summary: `"5 meter -> 16.4041995 foot"`.
    pub fn description(&self) -> String {
        format!(
            "{} {} -> {} {}",
            format_magnitude(self.value),
            self.from_unit,
            format_magnitude(self.result),
            self.to_unit
        )
    }
}

/// A history row projected for display: second-precision timestamp plus the
/// conversion summary.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub description: String,
}

impl From<&ConversionRecord> for HistoryEntry {
    fn from(record: &ConversionRecord) -> Self {
        Self {
            timestamp: record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            description: record.description(),
        }
    }
}

/// Owns the persisted conversion log. The path is injected so callers (and
/// tests) decide where history lives; nothing else touches the file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record. Creates the file (and parent directory) on first
    /// write. I/O failures surface to the caller; the presentation layer
    /// decides whether they are fatal.
    pub fn append(&self, record: &ConversionRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        let line = serde_json::to_string(record).context("Failed to serialize history record")?;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open history log: {}", self.path.display()))?;
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write history log: {}", self.path.display()))?;
        Ok(())
    }

    /// Read every record, oldest first. A missing file is the normal
    /// "no history yet" case and yields an empty vec. Malformed lines are
    /// skipped with a warning.
    pub fn read_all(&self) -> Result<Vec<ConversionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open history log: {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read line from history log")?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ConversionRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    eprintln!(
                        "Warning: skipping malformed history line {}: {}",
                        line_num + 1,
                        e
                    );
                }
            }
        }

        Ok(records)
    }

    /// Read every record projected for display.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.read_all()?.iter().map(HistoryEntry::from).collect())
    }

    /// Truncate the log. Idempotent: succeeds when the log is already empty
    /// or was never created.
    pub fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        File::create(&self.path)
            .with_context(|| format!("Failed to clear history log: {}", self.path.display()))?;
        Ok(())
    }
}
