//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use instant_convert::history::{ConversionRecord, HistoryStore};
use tempfile::TempDir;

/// A conversion log in a temporary directory, seedable through the library
pub struct TestLog {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TestLog {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("conversion_log.jsonl");
        Self { temp_dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> HistoryStore {
        HistoryStore::new(&self.path)
    }

    /// Seed the log with one record per (value, from, to, result) tuple
    pub fn with_records(self, records: &[(f64, &str, &str, f64)]) -> Self {
        let store = self.store();
        for (value, from, to, result) in records {
            store
                .append(&ConversionRecord::new(*value, from, to, *result))
                .expect("Failed to seed history");
        }
        self
    }
}

/// Command for the compiled binary, pointed at the given log file
pub fn cli_command(log: &TestLog) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_instant-convert"));
    cmd.arg("--log-file").arg(log.path());
    cmd
}
