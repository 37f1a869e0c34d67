// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output goes to stderr so that stdout stays free for the maps and
//! JSON snapshots the binaries print. With the `file-logging` feature and a
//! configured directory, each run also writes JSON lines to
//! `<dir>/run_<timestamp>/retina.log`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;
use crate::config::{LogFormat, LoggingConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps file writers alive; logs are flushed when it is dropped
pub struct LoggingGuard {
    started_at: DateTime<Utc>,
    log_dir: Option<PathBuf>,
    #[cfg(feature = "file-logging")]
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl LoggingGuard {
    /// Run folder holding the log file, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Filter directives combining the configured level with debug flags
pub fn filter_directives(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> String {
    let base = match config.level.trim() {
        "" => "info",
        level => level,
    };
    debug_flags.to_filter_string_with_base(base)
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter: {}", directives))
}

/// Name of the per-run folder for a start time: `run_YYYYmmdd_HHMMSS`
pub fn run_folder_name(started_at: DateTime<Utc>) -> String {
    format!("run_{}", started_at.format("%Y%m%d_%H%M%S"))
}

/// Install the global tracing subscriber
///
/// # Errors
/// Fails on an invalid filter, when the log directory cannot be created, or
/// when a global subscriber is already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> Result<LoggingGuard> {
    let started_at = Utc::now();
    let directives = filter_directives(debug_flags, config);

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false);
    let console_layer: BoxedLayer = match config.format {
        LogFormat::Text => console.with_filter(build_filter(&directives)?).boxed(),
        LogFormat::Json => console
            .json()
            .with_filter(build_filter(&directives)?)
            .boxed(),
    };
    layers.push(console_layer);

    #[cfg(feature = "file-logging")]
    let (log_dir, file_guard) = match &config.file_dir {
        Some(base_dir) => {
            let run_folder = base_dir.join(run_folder_name(started_at));
            std::fs::create_dir_all(&run_folder).with_context(|| {
                format!("Failed to create log directory: {}", run_folder.display())
            })?;

            let file_appender = tracing_appender::rolling::never(&run_folder, "retina.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_filter(build_filter(&directives)?)
                .boxed();
            layers.push(file_layer);

            (Some(run_folder), Some(guard))
        }
        None => (None, None),
    };
    #[cfg(not(feature = "file-logging"))]
    let log_dir: Option<PathBuf> = None;

    Registry::default()
        .with(layers)
        .try_init()
        .context("Failed to install the global tracing subscriber")?;

    #[cfg(not(feature = "file-logging"))]
    if let Some(dir) = &config.file_dir {
        tracing::warn!(
            target: "retina",
            "File logging to {} requested but the file-logging feature is disabled",
            dir.display()
        );
    }

    tracing::debug!(target: "retina", "Logging initialised with filter '{}'", directives);

    Ok(LoggingGuard {
        started_at,
        log_dir,
        #[cfg(feature = "file-logging")]
        _file_guard: file_guard,
    })
}

/// Initialize console logging with default settings
pub fn init_logging_default(debug_flags: &CrateDebugFlags) -> Result<LoggingGuard> {
    init_logging(debug_flags, &LoggingConfig::default())
}
