//! File-based tracing setup for the `alarmstatus` binary

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Directory holding `alarmstatus.log`
pub fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "", "alarmstatus").map(|dirs| dirs.data_dir().join("logs"))
}

/// Install the global subscriber writing to `alarmstatus.log`.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns the log file path.
pub fn init_logging(default_filter: &str) -> Result<PathBuf> {
    let log_dir = log_dir().context("Could not determine a data directory for logs")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("alarmstatus.log");
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    // Owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("[SECURITY] Failed to set log file permissions: {}", e);
            }
        }
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::builder()
            .parse(default_filter)
            .with_context(|| format!("Invalid log filter {:?}", default_filter))?,
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Bridge log crate events to tracing; must run after the subscriber is set.
    // Our own log_* macros already emit to tracing directly.
    tracing_log::LogTracer::builder()
        .ignore_crate("alarmstatus")
        .init()
        .context("Failed to initialize log-to-tracing bridge")?;

    tracing::info!("Logging initialized to: {:?}", log_path);
    Ok(log_path)
}
