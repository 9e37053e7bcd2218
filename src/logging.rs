//! Log setup. The TUI owns the terminal, so logs go to a file.

use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Default log location: `<data dir>/chirp/chirp.log`.
fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("chirp").join("chirp.log")
}

/// Install the global subscriber writing to `log_file` (or the default
/// location). `level` overrides both `RUST_LOG` and the built-in default.
pub fn init(log_file: Option<&Path>, level: Option<&str>) -> anyhow::Result<()> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chirp=info")),
    };

    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
