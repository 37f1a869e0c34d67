// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Light stimulus applied to a photoreceptor

use super::error::{NeuralError, NeuralResult};

/// Instantaneous light stimulus.
///
/// Only `photons` drives transduction. `frequency` and `angle` are stored for
/// later spectral and optical logic and are not read by any model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stimulus {
    pub photons: u32,
    pub frequency: i32,
    pub angle: i32,
}

impl Stimulus {
    /// No light
    pub const DARK: Stimulus = Stimulus {
        photons: 0,
        frequency: 0,
        angle: 0,
    };

    /// Validate a raw stimulus. Negative photon counts are rejected.
    pub fn new(photons: i32, frequency: i32, angle: i32) -> NeuralResult<Self> {
        let photons =
            u32::try_from(photons).map_err(|_| NeuralError::InvalidStimulus { photons })?;
        Ok(Self {
            photons,
            frequency,
            angle,
        })
    }
}
