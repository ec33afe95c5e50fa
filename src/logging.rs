use crate::{config::LoggingConfig, directories::Directories};
use anyhow::Context;
use std::{fs::OpenOptions, sync::Mutex};
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Default verbosity of the log sink, can be overridden with `RUST_LOG`.
const DEFAULT_LOG_FILTER: &str = "info";

/// Creates a log sink that appends plain text records to the configured file. The sink isn't
/// installed globally, the caller decides for how long it's active (see
/// `tracing::dispatcher::with_default`).
pub fn create_log_sink(config: &LoggingConfig) -> anyhow::Result<Dispatch> {
    Directories::ensure_parent_dir_exists(&config.path)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .with_context(|| format!("Cannot open log file {:?}.", config.path))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    Ok(Dispatch::new(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(log_file))
            .finish(),
    ))
}
