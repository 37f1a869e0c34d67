// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mapping from the loaded configuration to runtime parameters

use retina_config::RetinaConfig;
use retina_development::{GridDimensions, RetinaParameters};
use retina_neural::{PotentialRange, TransductionParameters};
use retina_observability::{LogFormat, LoggingConfig};

/// Build and wiring parameters for `Retina::new`
///
/// Call `validate_config` first; this does no checking of its own.
pub fn retina_parameters(config: &RetinaConfig) -> RetinaParameters {
    RetinaParameters {
        dimensions: GridDimensions::new(config.grid.rows, config.grid.cols),
        block_size: config.bipolar.block_size,
        transduction: TransductionParameters::with_values(
            config.photoreceptor.rod_half_saturation,
            config.photoreceptor.cone_half_saturation,
        ),
        photoreceptor_range: PotentialRange::new(
            config.photoreceptor.resting_potential,
            config.photoreceptor.saturation_potential,
        ),
        bipolar_range: PotentialRange::new(
            config.bipolar.resting_potential,
            config.bipolar.saturation_potential,
        ),
    }
}

pub fn logging_config(config: &RetinaConfig) -> LoggingConfig {
    LoggingConfig {
        level: config.system.log_level.clone(),
        format: match config.logging.format {
            retina_config::LogFormat::Text => LogFormat::Text,
            retina_config::LogFormat::Json => LogFormat::Json,
        },
        file_dir: config.logging.file_dir.clone(),
    }
}
