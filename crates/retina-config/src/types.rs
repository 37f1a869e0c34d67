// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section of `retina_configuration.toml`. Every section
//! and field is optional in the file; missing values take the defaults below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetinaConfig {
    pub system: SystemConfig,
    pub grid: GridConfig,
    pub photoreceptor: PhotoreceptorConfig,
    pub bipolar: BipolarConfig,
    pub stimulus: StimulusConfig,
    pub logging: LoggingConfig,
}

/// System-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Photoreceptor grid extent
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

/// Photoreceptor potential range and sensitivity
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhotoreceptorConfig {
    /// Dark potential (mV)
    pub resting_potential: f64,
    /// Potential approached under unbounded light (mV)
    pub saturation_potential: f64,
    /// Photons for half-maximal rod response
    pub rod_half_saturation: f64,
    /// Photons for half-maximal cone response
    pub cone_half_saturation: f64,
}

impl Default for PhotoreceptorConfig {
    fn default() -> Self {
        Self {
            resting_potential: -40.0,
            saturation_potential: -70.0,
            rod_half_saturation: 10.0,
            cone_half_saturation: 100.0,
        }
    }
}

/// Bipolar layer: potential range and receptive-field block size
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BipolarConfig {
    pub resting_potential: f64,
    pub saturation_potential: f64,
    /// Side of the square receptive field (odd)
    pub block_size: usize,
}

impl Default for BipolarConfig {
    fn default() -> Self {
        Self {
            resting_potential: -40.0,
            saturation_potential: -70.0,
            block_size: 3,
        }
    }
}

/// Uniform stimulus applied by the demo driver
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StimulusConfig {
    pub photons: i32,
    /// Light frequency; stored, not used by transduction
    pub frequency: i32,
    /// Angle of incidence; stored, not used by transduction
    pub angle: i32,
    pub ticks: u32,
}

impl Default for StimulusConfig {
    fn default() -> Self {
        Self {
            photons: 50,
            frequency: 550,
            angle: 0,
            ticks: 1,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging output
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Directory for a rolling log file; console only when unset
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            file_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RetinaConfig = toml::from_str(
            r#"
            [grid]
            rows = 12

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.grid.rows, 12);
        assert_eq!(config.grid.cols, 10);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.photoreceptor, PhotoreceptorConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = RetinaConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: RetinaConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
