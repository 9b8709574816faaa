//! Logging and tracing setup for the CLI.
//!
//! Human-readable output goes to stderr, filtered by `-q`/`-v`/config
//! level (or `RUST_LOG` when set). Structured JSONL records go to a log
//! file via a non-blocking appender; the returned guard must stay alive
//! for the process lifetime so buffered records flush on exit.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where log files are written.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (takes precedence over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables with an optional config-file
    /// override for the log directory.
    ///
    /// `LEXPLAIN_LOG_PATH` wins over `LEXPLAIN_LOG_DIR`, which wins over
    /// the config file's `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("LEXPLAIN_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("LEXPLAIN_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the stderr filter from CLI flags and the configured level.
///
/// `RUST_LOG` overrides everything; otherwise `-q` forces `error`, each
/// `-v` steps the level up from the config default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match (config_level, verbose) {
            (level, 0) => level,
            ("error", 1) => "warn",
            ("warn" | "error", _) if verbose == 1 => "info",
            (_, 1) => "debug",
            (_, _) => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global subscriber: stderr layer plus an optional JSONL
/// file layer.
///
/// Returns the appender guard when file logging is active; dropping it
/// stops the background writer, so hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Build the non-blocking file writer, creating directories as needed.
fn file_writer(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)>> {
    if let Some(ref path) = config.log_path {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        return Ok(Some(tracing_appender::non_blocking(file)));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::daily(dir, "lexplain.jsonl");
        return Ok(Some(tracing_appender::non_blocking(appender)));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_forces_error_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return; // RUST_LOG overrides flags; nothing to assert here
        }
        let filter = env_filter(true, 0, "debug");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbose_steps_up_from_config_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(false, 0, "info").to_string(), "info");
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "info").to_string(), "trace");
    }

    #[test]
    fn default_config_has_no_file_logging() {
        let config = ObservabilityConfig::default();
        assert!(config.log_path.is_none());
        assert!(config.log_dir.is_none());
    }
}
