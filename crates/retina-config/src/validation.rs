// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Catches values the grid builder or the wiring pass would reject later,
//! and reports all of them at once.

use crate::{ConfigError, ConfigResult, RetinaConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    ZeroDimension { field: String },
    InvalidBlockSize { block_size: usize, reason: String },
    NonPositive { field: String, value: f64 },
    SensitivityOrder { rod: f64, cone: f64 },
    DegenerateRange { section: String, potential: f64 },
    BipolarRangeTooNarrow { bipolar: (f64, f64), photoreceptor: (f64, f64) },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension { field } => write!(f, "{} must be greater than zero", field),
            Self::InvalidBlockSize { block_size, reason } => {
                write!(f, "bipolar.block_size = {}: {}", block_size, reason)
            }
            Self::NonPositive { field, value } => {
                write!(f, "{} = {} must be positive and finite", field, value)
            }
            Self::SensitivityOrder { rod, cone } => write!(
                f,
                "rod_half_saturation ({}) must be below cone_half_saturation ({})",
                rod, cone
            ),
            Self::DegenerateRange { section, potential } => write!(
                f,
                "{}: resting and saturation potentials are both {}",
                section, potential
            ),
            Self::BipolarRangeTooNarrow { bipolar, photoreceptor } => write!(
                f,
                "bipolar potential range {:?} must contain the photoreceptor range {:?}",
                bipolar, photoreceptor
            ),
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every violation found
pub fn validate_config(config: &RetinaConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_grid(config, &mut errors);
    validate_block_size(config, &mut errors);
    validate_sensitivity(config, &mut errors);
    validate_potential_ranges(config, &mut errors);
    validate_stimulus(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_grid(config: &RetinaConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.grid.rows == 0 {
        errors.push(ConfigValidationError::ZeroDimension {
            field: "grid.rows".to_string(),
        });
    }
    if config.grid.cols == 0 {
        errors.push(ConfigValidationError::ZeroDimension {
            field: "grid.cols".to_string(),
        });
    }
}

fn validate_block_size(config: &RetinaConfig, errors: &mut Vec<ConfigValidationError>) {
    let block_size = config.bipolar.block_size;
    if block_size == 0 {
        errors.push(ConfigValidationError::InvalidBlockSize {
            block_size,
            reason: "must be greater than zero".to_string(),
        });
        return;
    }
    if block_size % 2 == 0 {
        errors.push(ConfigValidationError::InvalidBlockSize {
            block_size,
            reason: "must be odd so the tile has a center cell".to_string(),
        });
    }
    if block_size > config.grid.rows || block_size > config.grid.cols {
        errors.push(ConfigValidationError::InvalidBlockSize {
            block_size,
            reason: format!(
                "larger than the {}x{} grid",
                config.grid.rows, config.grid.cols
            ),
        });
    }
}

fn validate_sensitivity(config: &RetinaConfig, errors: &mut Vec<ConfigValidationError>) {
    let rod = config.photoreceptor.rod_half_saturation;
    let cone = config.photoreceptor.cone_half_saturation;
    let mut valid = true;

    for (field, value) in [
        ("photoreceptor.rod_half_saturation", rod),
        ("photoreceptor.cone_half_saturation", cone),
    ] {
        if !(value.is_finite() && value > 0.0) {
            valid = false;
            errors.push(ConfigValidationError::NonPositive {
                field: field.to_string(),
                value,
            });
        }
    }

    if valid && rod >= cone {
        errors.push(ConfigValidationError::SensitivityOrder { rod, cone });
    }
}

fn validate_potential_ranges(config: &RetinaConfig, errors: &mut Vec<ConfigValidationError>) {
    let ranges = [
        (
            "photoreceptor",
            config.photoreceptor.resting_potential,
            config.photoreceptor.saturation_potential,
        ),
        (
            "bipolar",
            config.bipolar.resting_potential,
            config.bipolar.saturation_potential,
        ),
    ];

    let mut all_finite = true;
    for (section, resting, saturated) in ranges {
        if !resting.is_finite() || !saturated.is_finite() {
            all_finite = false;
            errors.push(ConfigValidationError::InvalidValue {
                field: format!("{}.resting_potential", section),
                reason: "potentials must be finite".to_string(),
            });
        } else if resting == saturated {
            errors.push(ConfigValidationError::DegenerateRange {
                section: section.to_string(),
                potential: resting,
            });
        }
    }
    if !all_finite {
        return;
    }

    // Bipolar potentials are averages of photoreceptor potentials
    let (_, p_rest, p_sat) = ranges[0];
    let (_, b_rest, b_sat) = ranges[1];
    let (lo, hi) = (b_rest.min(b_sat), b_rest.max(b_sat));
    let inside = |v: f64| v >= lo && v <= hi;
    if !(inside(p_rest) && inside(p_sat)) {
        errors.push(ConfigValidationError::BipolarRangeTooNarrow {
            bipolar: (b_rest, b_sat),
            photoreceptor: (p_rest, p_sat),
        });
    }
}

fn validate_stimulus(config: &RetinaConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.stimulus.photons < 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "stimulus.photons".to_string(),
            reason: format!("{} photons is negative", config.stimulus.photons),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(config: &RetinaConfig) -> String {
        match validate_config(config) {
            Err(ConfigError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&RetinaConfig::default()).is_ok());
    }

    #[test]
    fn test_even_block_size() {
        let mut config = RetinaConfig::default();
        config.bipolar.block_size = 4;
        assert!(message(&config).contains("must be odd"));
    }

    #[test]
    fn test_zero_block_size_reported_once() {
        let mut config = RetinaConfig::default();
        config.bipolar.block_size = 0;
        let msg = message(&config);
        assert_eq!(msg.matches("bipolar.block_size").count(), 1);
    }

    #[test]
    fn test_block_larger_than_grid() {
        let mut config = RetinaConfig::default();
        config.grid.rows = 2;
        assert!(message(&config).contains("larger than the 2x10 grid"));
    }

    #[test]
    fn test_sensitivity_order() {
        let mut config = RetinaConfig::default();
        config.photoreceptor.rod_half_saturation = 200.0;
        assert!(message(&config).contains("must be below"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RetinaConfig::default();
        config.grid.cols = 0;
        config.photoreceptor.cone_half_saturation = -1.0;
        config.bipolar.saturation_potential = config.bipolar.resting_potential;
        config.stimulus.photons = -5;

        let msg = message(&config);
        assert!(msg.contains("grid.cols must be greater than zero"));
        assert!(msg.contains("cone_half_saturation = -1"));
        assert!(msg.contains("bipolar: resting and saturation potentials are both -40"));
        assert!(msg.contains("stimulus.photons"));
    }

    #[test]
    fn test_bipolar_range_must_contain_photoreceptor_range() {
        let mut config = RetinaConfig::default();
        config.bipolar.resting_potential = -45.0;
        config.bipolar.saturation_potential = -65.0;
        assert!(message(&config).contains("must contain the photoreceptor range"));

        config.bipolar.resting_potential = -35.0;
        config.bipolar.saturation_potential = -75.0;
        assert!(validate_config(&config).is_ok());
    }
}
