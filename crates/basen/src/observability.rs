//! Logging and tracing initialization.
//!
//! Human-readable logs go to stderr so command output on stdout stays
//! scriptable. When a log destination is known (flag, env, config, or the
//! platform data directory), a JSONL copy is written there through a
//! non-blocking appender.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Default file name for the JSONL log.
const LOG_FILE_NAME: &str = "basen.jsonl";

/// Where log output should go, resolved from environment and config.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`BASEN_LOG_PATH`). Wins over any directory.
    pub log_path: Option<PathBuf>,
    /// Log directory (`BASEN_LOG_DIR`, or `log_dir` from config).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with a config-file override for
    /// the log directory.
    ///
    /// Precedence for the directory: `BASEN_LOG_DIR` > `config_log_dir` >
    /// platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("BASEN_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("BASEN_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// Resolve the log file to write, if any.
    ///
    /// Falls back to `<platform data dir>/logs/basen.jsonl` when nothing
    /// is configured; `None` if the platform directory cannot be found.
    fn resolve_log_file(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.log_path {
            return Some(path.clone());
        }
        if let Some(ref dir) = self.log_dir {
            return Some(dir.join(LOG_FILE_NAME));
        }
        basen_core::config::user_data_local_dir()
            .map(|dir| dir.join("logs").join(LOG_FILE_NAME).into_std_path_buf())
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`,
/// `-v`/`-vv` raise to `debug`/`trace`, and the config level applies last.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(quiet, verbose, config_level)))
}

/// Pick the effective level directive from CLI flags and config.
const fn level_for<'a>(quiet: bool, verbose: u8, config_level: &'a str) -> &'a str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns the appender guard; hold it for the life of the process so
/// buffered log lines are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false);

    // An unwritable log location degrades to stderr-only logging; it is
    // not worth failing the actual command over.
    let (file_layer, guard) = match config.resolve_log_file().and_then(|path| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
    }) {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().json().with_writer(writer).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to set global tracing subscriber")?;

    Ok(guard)
}
