use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::catalog;
use crate::engine::{self, format_magnitude};
use crate::history::{ConversionRecord, HistoryStore, write_csv};
use crate::trivia;
use crate::utils::{default_log_path, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "instant-convert")]
#[command(version = "0.1.0")]
#[command(about = "Convert values between units and keep a conversion history", long_about = None)]
pub struct Cli {
    /// Path of the conversion log (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value to convert (non-negative)
        value: f64,
        /// Source unit, e.g. "meter" or "kilometer/hour"
        from: String,
        /// Destination unit
        to: String,
        /// Category; inferred when omitted (temperature units select the
        /// temperature formula table)
        #[arg(long)]
        category: Option<String>,
    },
    /// List the supported categories
    Categories,
    /// List the units of one category
    Units {
        /// Category name, e.g. "Length"
        category: String,
    },
    /// Show the conversion history
    History {
        /// Print as CSV instead of a table
        #[arg(long)]
        csv: bool,
        /// Write the CSV rendering to a file
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },
    /// Delete all conversion history
    ClearHistory,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_path = match cli.log_file {
        Some(path) => path,
        None => default_log_path()?,
    };
    let store = HistoryStore::new(log_path);

    match cli.command {
        Some(Commands::Convert { value, from, to, category }) => {
            run_convert(&store, value, &from, &to, category.as_deref())?;
        }
        Some(Commands::Categories) => {
            for category in catalog::CATEGORIES {
                println!("{}", category);
            }
        }
        Some(Commands::Units { category }) => {
            let units = catalog::units_for(&category)
                .with_context(|| format!("Unknown category: {}", category))?;
            for unit in units {
                println!("{}", unit);
            }
        }
        Some(Commands::History { csv, export }) => {
            show_history(&store, csv, export)?;
        }
        Some(Commands::ClearHistory) => {
            store.clear()?;
            println!("History cleared");
        }
        None => {
            crate::tui::run_interactive(store)?;
        }
    }

    Ok(())
}

fn run_convert(
    store: &HistoryStore,
    value: f64,
    from: &str,
    to: &str,
    category: Option<&str>,
) -> Result<()> {
    if value < 0.0 {
        bail!("Value must be non-negative");
    }

    let category = category.map(str::to_string).unwrap_or_else(|| infer_category(from, to));
    let conversion = engine::convert(value, from, to, &category)
        .with_context(|| format!("Invalid conversion: {} -> {}", from, to))?;

    println!("{} {}", format_magnitude(conversion.magnitude), conversion.unit_label);

    // The result is already printed; a log failure is only a warning
    let record = ConversionRecord::new(value, from, &conversion.unit_label, conversion.magnitude);
    if let Err(e) = store.append(&record) {
        eprintln!("Warning: could not log conversion: {:#}", e);
    }

    println!("{}", trivia::random_fact());
    Ok(())
}

/// Pick the category for a one-shot conversion: temperature unit names route
/// to the formula table, everything else goes through the unit registry.
fn infer_category(from: &str, to: &str) -> String {
    let temperature = catalog::units_for("Temperature").unwrap_or_default();
    if temperature.contains(&from) && temperature.contains(&to) {
        "Temperature".to_string()
    } else {
        "General".to_string()
    }
}

fn show_history(store: &HistoryStore, csv: bool, export: Option<PathBuf>) -> Result<()> {
    let entries = store.entries()?;

    if let Some(path) = export {
        write_csv(&entries, &path)?;
        println!("Exported {} entries to {}", entries.len(), format_path_with_tilde(&path));
        return Ok(());
    }

    if csv {
        print!("{}", crate::history::to_csv(&entries));
        return Ok(());
    }

    if entries.is_empty() {
        println!("No history found");
        return Ok(());
    }

    for entry in &entries {
        println!("{}  {}", entry.timestamp, entry.description);
    }
    println!();
    println!("{} entries ({})", entries.len(), format_path_with_tilde(store.path()));
    Ok(())
}
