//! File-based tracing setup.
//!
//! The terminal belongs to the table, so log output goes to a per-run file
//! instead of stderr.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber, writing under `log_dir` when given and the
/// platform cache directory otherwise.
///
/// Returns the path of the log file.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir(),
    };
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_name = log_file_name();
    let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Leak the guard to keep the file writer alive for the whole process.
    std::mem::forget(guard);

    let log_file = log_dir.join(file_name);
    tracing::info!("Log file: {}", log_file.display());
    Ok(log_file)
}

/// Platform log directory:
/// - macOS: `~/Library/Caches/leaderboard/logs`
/// - Linux: `~/.cache/leaderboard/logs` (or `$XDG_CACHE_HOME/leaderboard/logs`)
/// - Windows: `%LOCALAPPDATA%\leaderboard\cache\logs`
/// - Fallback: `<tmp>/leaderboard/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "leaderboard")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("leaderboard"))
        .join("logs")
}

fn log_file_name() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("client_{timestamp}.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }

    #[test]
    fn log_file_is_created_in_requested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        // A subscriber may already be installed by another test; the
        // directory is created before that matters.
        let result = setup_logging(Some(&nested));
        assert!(nested.is_dir());
        if let Ok(path) = result {
            assert!(path.starts_with(&nested));
        }
    }
}
