// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later ones winning:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, LogFormat, RetinaConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE_NAME: &str = "retina_configuration.toml";

/// Find the retina configuration file
///
/// Search order:
/// 1. `RETINA_CONFIG_PATH` environment variable
/// 2. Current working directory: `./retina_configuration.toml`
/// 3. Parent directories, up to 5 levels
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("RETINA_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by RETINA_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Retina configuration file '{}' not found in any of these locations:\n{}\n\nSet RETINA_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML.
/// Validation is a separate step (`validate_config`).
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<RetinaConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: RetinaConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

fn parse_into<T: FromStr>(value: Option<&str>, slot: &mut T) {
    if let Some(parsed) = value.and_then(|v| v.trim().parse::<T>().ok()) {
        *slot = parsed;
    }
}

fn parse_format(value: &str) -> Option<LogFormat> {
    match value.trim().to_lowercase().as_str() {
        "text" => Some(LogFormat::Text),
        "json" => Some(LogFormat::Json),
        _ => None,
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `RETINA_LOG_LEVEL` -> `system.log_level`
/// - `RETINA_GRID_ROWS` -> `grid.rows`
/// - `RETINA_GRID_COLS` -> `grid.cols`
/// - `RETINA_BLOCK_SIZE` -> `bipolar.block_size`
/// - `RETINA_ROD_HALF_SATURATION` -> `photoreceptor.rod_half_saturation`
/// - `RETINA_CONE_HALF_SATURATION` -> `photoreceptor.cone_half_saturation`
/// - `RETINA_STIMULUS_PHOTONS` -> `stimulus.photons`
/// - `RETINA_LOG_FORMAT` -> `logging.format`
/// - `RETINA_LOG_DIR` -> `logging.file_dir`
///
/// Values that fail to parse are ignored.
pub fn apply_environment_overrides(config: &mut RetinaConfig) {
    let var = |name: &str| env::var(name).ok();

    if let Some(value) = var("RETINA_LOG_LEVEL") {
        config.system.log_level = value;
    }
    parse_into(var("RETINA_GRID_ROWS").as_deref(), &mut config.grid.rows);
    parse_into(var("RETINA_GRID_COLS").as_deref(), &mut config.grid.cols);
    parse_into(
        var("RETINA_BLOCK_SIZE").as_deref(),
        &mut config.bipolar.block_size,
    );
    parse_into(
        var("RETINA_ROD_HALF_SATURATION").as_deref(),
        &mut config.photoreceptor.rod_half_saturation,
    );
    parse_into(
        var("RETINA_CONE_HALF_SATURATION").as_deref(),
        &mut config.photoreceptor.cone_half_saturation,
    );
    parse_into(
        var("RETINA_STIMULUS_PHOTONS").as_deref(),
        &mut config.stimulus.photons,
    );
    if let Some(format) = var("RETINA_LOG_FORMAT").as_deref().and_then(parse_format) {
        config.logging.format = format;
    }
    if let Some(dir) = var("RETINA_LOG_DIR") {
        config.logging.file_dir = Some(PathBuf::from(dir));
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"rows": "20", "block_size": "5"}`)
pub fn apply_cli_overrides(config: &mut RetinaConfig, cli_args: &HashMap<String, String>) {
    let arg = |name: &str| cli_args.get(name).map(String::as_str);

    if let Some(value) = arg("log_level") {
        config.system.log_level = value.to_string();
    }

    parse_into(arg("rows"), &mut config.grid.rows);
    parse_into(arg("cols"), &mut config.grid.cols);
    parse_into(arg("block_size"), &mut config.bipolar.block_size);

    parse_into(arg("photons"), &mut config.stimulus.photons);
    parse_into(arg("frequency"), &mut config.stimulus.frequency);
    parse_into(arg("angle"), &mut config.stimulus.angle);
    parse_into(arg("ticks"), &mut config.stimulus.ticks);

    if let Some(format) = arg("log_format").and_then(parse_format) {
        config.logging.format = format;
    }
    if let Some(dir) = arg("log_dir") {
        config.logging.file_dir = Some(PathBuf::from(dir));
    }
}
