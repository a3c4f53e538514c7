//! Instant Convert - interactive unit converter with a conversion history
//!
//! This library implements a small unit conversion tool. It supports:
//!
//! - Converting values between units in 14 fixed categories, including
//!   compound units like `kilometer/hour`
//! - A dedicated affine formula table for temperature
//! - An append-only, JSON Lines conversion history with CSV export
//! - A random trivia fact after each successful conversion
//!
//! # Example
//!
//! ```
//! use instant_convert::engine::{convert, format_magnitude};
//!
//! let result = convert(1.0, "kilometer", "mile", "Length")?;
//! assert_eq!(format_magnitude(result.magnitude), "0.62137119");
//! # Ok::<(), instant_convert::engine::ConversionError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod engine;
pub mod history;
pub mod trivia;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use engine::{Conversion, ConversionError, convert, format_magnitude};
pub use history::{ConversionRecord, HistoryEntry, HistoryStore};
pub use trivia::random_fact;
