// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Photoreceptors: rods and cones

use crate::models::{SaturatingModel, TransductionModel, TransductionParameters};
use crate::types::{ConeChannel, NeuralResult, PhotoreceptorType, PotentialRange, Stimulus};

/// Rod, or cone with its spectral channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoreceptorVariant {
    Rod,
    Cone(ConeChannel),
}

/// A light-transducing cell.
///
/// The variant (and with it the cone channel) and the half-saturation
/// constant are fixed at construction. Only the stimulus changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Photoreceptor {
    variant: PhotoreceptorVariant,
    half_saturation: f64,
    stimulus: Stimulus,
}

impl Photoreceptor {
    pub fn new(variant: PhotoreceptorVariant, params: &TransductionParameters) -> Self {
        Self {
            variant,
            half_saturation: params.half_saturation(variant),
            stimulus: Stimulus::DARK,
        }
    }

    pub fn rod(params: &TransductionParameters) -> Self {
        Self::new(PhotoreceptorVariant::Rod, params)
    }

    pub fn cone(channel: ConeChannel, params: &TransductionParameters) -> Self {
        Self::new(PhotoreceptorVariant::Cone(channel), params)
    }

    pub fn variant(&self) -> PhotoreceptorVariant {
        self.variant
    }

    /// Rod or cone
    pub fn photoreceptor_type(&self) -> PhotoreceptorType {
        match self.variant {
            PhotoreceptorVariant::Rod => PhotoreceptorType::Rod,
            PhotoreceptorVariant::Cone(_) => PhotoreceptorType::Cone,
        }
    }

    /// Spectral channel; `None` for rods
    pub fn rgb(&self) -> Option<ConeChannel> {
        match self.variant {
            PhotoreceptorVariant::Rod => None,
            PhotoreceptorVariant::Cone(channel) => Some(channel),
        }
    }

    pub fn half_saturation(&self) -> f64 {
        self.half_saturation
    }

    /// Record a stimulus. Fails with `InvalidStimulus` for negative photons,
    /// leaving the previous stimulus in place.
    pub fn set_inputs(&mut self, photons: i32, frequency: i32, angle: i32) -> NeuralResult<()> {
        self.stimulus = Stimulus::new(photons, frequency, angle)?;
        Ok(())
    }

    pub fn set_stimulus(&mut self, stimulus: Stimulus) {
        self.stimulus = stimulus;
    }

    pub fn stimulus(&self) -> Stimulus {
        self.stimulus
    }

    pub fn photons_hit(&self) -> u32 {
        self.stimulus.photons
    }

    pub fn photon_frequency(&self) -> i32 {
        self.stimulus.frequency
    }

    pub fn light_angle(&self) -> i32 {
        self.stimulus.angle
    }

    /// Potential produced by the current stimulus over `range`
    pub fn transduce(&self, range: &PotentialRange) -> f64 {
        SaturatingModel.transduce(self.stimulus.photons, self.half_saturation, range)
    }
}
