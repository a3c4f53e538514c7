//! CSV rendering of the conversion history.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::HistoryEntry;

/// Default filename for the exported history.
pub const EXPORT_FILENAME: &str = "conversion_history.csv";

/// Render history entries as two-column CSV: `Timestamp,Conversion`.
pub fn to_csv(entries: &[HistoryEntry]) -> String {
    let mut csv = String::from("Timestamp,Conversion\n");
    for entry in entries {
        csv.push_str(&csv_field(&entry.timestamp));
        csv.push(',');
        csv.push_str(&csv_field(&entry.description));
        csv.push('\n');
    }
    csv
}

/// Write the CSV rendering to `path`.
pub fn write_csv(entries: &[HistoryEntry], path: &Path) -> Result<()> {
    fs::write(path, to_csv(entries))
        .with_context(|| format!("Failed to write history export: {}", path.display()))
}

/// Quote a field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
