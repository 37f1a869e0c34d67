// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # retina-observability
//!
//! Logging setup shared by the retina binaries, with per-crate debug flag
//! support.
//!
//! ## Features
//! - `file-logging`: JSON log file per run, written through `tracing-appender`

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Tracing targets that accept `--debug-<name>` flags
pub const KNOWN_CRATES: &[&str] = &[
    "retina",
    "retina-development",
];
