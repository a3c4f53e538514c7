use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Log filename inside the platform data directory.
const LOG_FILENAME: &str = "conversion_log.jsonl";

/// Default location of the conversion log: the platform data directory
/// (`~/.local/share/instant-convert/` on Linux, `~/Library/Application
/// Support/instant-convert/` on macOS). Overridable with `--log-file`.
pub fn default_log_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().context("Failed to get platform data directory")?;
    Ok(data_dir.join("instant-convert").join(LOG_FILENAME))
}

/// Replace the home directory prefix with `~` for display.
pub fn format_path_with_tilde(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return format!("~/{}", stripped.display());
    }
    path.display().to_string()
}
