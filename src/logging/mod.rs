//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `stopwatches_<date>.log` in the configured log directory (default:
//! `~/.local/share/stopwatches/logs/`). Logging is off unless enabled in the
//! config; `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Flushes buffered log lines when dropped. Hold it for the lifetime of the
/// program.
pub struct LogGuard {
    _guard: WorkerGuard,
    pub path: PathBuf,
}

pub fn log_file_name() -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    format!("stopwatches_{}.log", date)
}

fn expand_home(dir: &std::path::Path) -> PathBuf {
    match dir.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| dir.to_path_buf()),
        Err(_) => dir.to_path_buf(),
    }
}

/// Install the global subscriber. Returns `None` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<LogGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_name = log_file_name();
    let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level `{}`", config.level))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
        .with_context(|| "Failed to install log subscriber")?;

    Ok(Some(LogGuard {
        _guard: guard,
        path: log_dir.join(file_name),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        assert!(name.starts_with("stopwatches_"));
        assert!(name.ends_with(".log"));
        // stopwatches_YYYY-MM-DD.log
        assert_eq!(name.len(), "stopwatches_".len() + 10 + ".log".len());
    }

    #[test]
    fn test_expand_home() {
        let plain = PathBuf::from("/var/log/stopwatches");
        assert_eq!(expand_home(&plain), plain);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(&PathBuf::from("~/logs")), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let cfg = LoggingConfig::default();
        assert!(init(&cfg).unwrap().is_none());
    }

    #[test]
    fn test_enabled_reports_log_path() {
        let dir = std::env::temp_dir().join(format!("stopwatches_logs_{}", std::process::id()));
        let cfg = LoggingConfig {
            enabled: true,
            level: "debug".into(),
            log_dir: dir.clone(),
        };
        let guard = init(&cfg).unwrap().unwrap();
        assert_eq!(guard.path.parent(), Some(dir.as_path()));
        assert_eq!(
            guard.path.file_name().and_then(|n| n.to_str()),
            Some(log_file_name().as_str())
        );
        drop(guard);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
