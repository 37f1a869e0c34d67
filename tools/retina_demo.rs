// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Retina demo driver.
//!
//! Builds the retina described by `retina_configuration.toml` (or the
//! defaults when no file is found), applies the configured uniform stimulus,
//! runs one step and prints the cell maps. `--json` prints a snapshot
//! instead.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use retina::config::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    validate_config, ConfigError, RetinaConfig,
};
use retina::development::{display, Retina};
use retina::observability::{debug_flags_help, init_logging, parse_debug_flags};
use retina::setup::{logging_config, retina_parameters};
use tracing::{debug, info};

struct DemoArgs {
    config_path: Option<PathBuf>,
    overrides: HashMap<String, String>,
    json: bool,
}

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: retina_demo [--config <path>] [--rows <n>] [--cols <n>] [--block-size <n>]\n\
         \x20                  [--photons <n>] [--frequency <n>] [--angle <n>] [--ticks <n>]\n\
         \x20                  [--log-level <level>] [--log-format text|json] [--log-dir <path>]\n\
         \x20                  [--json]\n\n\
         Without --config, retina_configuration.toml is searched for (RETINA_CONFIG_PATH,\n\
         then the working directory and its parents); built-in defaults apply if none is found.\n\n\
         {}",
        debug_flags_help()
    );
    process::exit(2);
}

fn parse_args() -> DemoArgs {
    let mut parsed = DemoArgs {
        config_path: None,
        overrides: HashMap::new(),
        json: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let key = match arg.as_str() {
            "--config" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                parsed.config_path = Some(PathBuf::from(v));
                continue;
            }
            "--json" => {
                parsed.json = true;
                continue;
            }
            "-h" | "--help" => usage_and_exit(),
            "--rows" => "rows",
            "--cols" => "cols",
            "--block-size" => "block_size",
            "--photons" => "photons",
            "--frequency" => "frequency",
            "--angle" => "angle",
            "--ticks" => "ticks",
            "--log-level" => "log_level",
            "--log-format" => "log_format",
            "--log-dir" => "log_dir",
            // Consumed by parse_debug_flags
            other if other.starts_with("--debug-") => continue,
            other => {
                eprintln!("Unknown argument: {other}");
                usage_and_exit();
            }
        };
        let v = args.next().unwrap_or_else(|| usage_and_exit());
        parsed.overrides.insert(key.to_string(), v);
    }

    parsed
}

/// File config when one is found, defaults otherwise; overrides applied either way
fn resolve_config(args: &DemoArgs) -> Result<(RetinaConfig, Option<PathBuf>)> {
    let path = match &args.config_path {
        Some(path) => Some(path.clone()),
        None => match find_config_file() {
            Ok(path) => Some(path),
            Err(ConfigError::FileNotFound(_)) => None,
            Err(e) => return Err(e.into()),
        },
    };

    let config = match &path {
        Some(path) => load_config(Some(path), Some(&args.overrides))
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            let mut config = RetinaConfig::default();
            apply_environment_overrides(&mut config);
            apply_cli_overrides(&mut config, &args.overrides);
            config
        }
    };

    validate_config(&config)?;
    Ok((config, path))
}

fn main() -> Result<()> {
    let args = parse_args();
    let (config, config_path) = resolve_config(&args)?;

    let debug_flags = parse_debug_flags();
    let _logging = init_logging(&debug_flags, &logging_config(&config))?;

    match &config_path {
        Some(path) => info!(target: "retina", "Configuration loaded from {}", path.display()),
        None => info!(target: "retina", "No configuration file found, using defaults"),
    }
    debug!(target: "retina", "{:?}", config);

    let mut retina = Retina::new(&retina_parameters(&config)).context("Failed to build retina")?;
    let stimulus = &config.stimulus;
    retina.apply_uniform_stimulus(stimulus.photons, stimulus.frequency, stimulus.angle)?;
    retina.step(stimulus.ticks)?;

    if args.json {
        let snapshot = retina.snapshot()?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let arena = retina.arena();
    let photoreceptors = retina.photoreceptors();
    let bipolars = retina.bipolars();

    println!("Photoreceptor types:");
    print!("{}", display::type_map(arena, photoreceptors)?);
    println!();
    println!("Cone channels:");
    print!("{}", display::channel_map(arena, photoreceptors)?);
    println!();
    println!("Photoreceptor potentials (mV), {} photons:", stimulus.photons);
    print!("{}", display::potential_map(arena, photoreceptors, 2)?);
    println!();
    println!(
        "Bipolar potentials (mV), {}x{} receptive fields:",
        retina.block_size(),
        retina.block_size()
    );
    print!("{}", display::potential_map(arena, bipolars, 2)?);

    Ok(())
}
