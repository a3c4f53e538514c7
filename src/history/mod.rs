//! Conversion history: persistent store and CSV export.

pub mod export;
pub mod store;

pub use export::{EXPORT_FILENAME, to_csv, write_csv};
pub use store::{ConversionRecord, HistoryEntry, HistoryStore};
