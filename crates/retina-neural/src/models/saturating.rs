// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Saturating (Michaelis-Menten) Transduction Model
//!
//! The default photoreceptor response curve.
//!
//! ## Model
//!
//! ```text
//! normalized = photons / K
//! response   = normalized / (normalized + 1)
//! V          = (1 - response) × V_rest + response × V_sat
//!            = V_rest + response × (V_sat - V_rest)
//!
//! Where:
//! - K     = half-saturation constant (photons giving response 0.5)
//! - V_rest = resting potential (darkness)
//! - V_sat  = saturation potential (approached, never reached)
//! ```
//!
//! Rods use a K an order of magnitude below cones: they saturate at
//! scotopic light levels where cones barely respond.

use super::traits::{ModelParameters, TransductionModel};
use crate::cells::PhotoreceptorVariant;
use crate::types::PotentialRange;

/// Saturating photoreceptor model
#[derive(Debug, Clone, Copy, Default)]
pub struct SaturatingModel;

impl SaturatingModel {
    pub fn new() -> Self {
        Self
    }
}

impl TransductionModel for SaturatingModel {
    fn model_name(&self) -> &'static str {
        "Saturating (Michaelis-Menten)"
    }

    #[inline]
    fn response(&self, photons: u32, half_saturation: f64) -> f64 {
        let normalized = f64::from(photons) / half_saturation;
        normalized / (normalized + 1.0)
    }

    #[inline]
    fn membrane_potential(&self, response: f64, range: &PotentialRange) -> f64 {
        range.interpolate(response)
    }
}

/// Half-saturation constants per photoreceptor class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransductionParameters {
    /// Rod half-saturation constant (photons)
    pub rod_half_saturation: f64,

    /// Cone half-saturation constant (photons), shared by all three channels
    pub cone_half_saturation: f64,
}

impl TransductionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(rod_half_saturation: f64, cone_half_saturation: f64) -> Self {
        Self {
            rod_half_saturation,
            cone_half_saturation,
        }
    }

    /// K for a photoreceptor variant
    pub fn half_saturation(&self, variant: PhotoreceptorVariant) -> f64 {
        match variant {
            PhotoreceptorVariant::Rod => self.rod_half_saturation,
            PhotoreceptorVariant::Cone(_) => self.cone_half_saturation,
        }
    }
}

impl Default for TransductionParameters {
    fn default() -> Self {
        Self {
            rod_half_saturation: 10.0,
            cone_half_saturation: 100.0,
        }
    }
}

impl ModelParameters for TransductionParameters {
    fn validate(&self) -> Result<(), &'static str> {
        if !(self.rod_half_saturation.is_finite() && self.rod_half_saturation > 0.0) {
            return Err("Transduction: rod half-saturation must be positive and finite");
        }
        if !(self.cone_half_saturation.is_finite() && self.cone_half_saturation > 0.0) {
            return Err("Transduction: cone half-saturation must be positive and finite");
        }
        if self.rod_half_saturation >= self.cone_half_saturation {
            return Err("Transduction: rods must be more sensitive (lower K) than cones");
        }
        Ok(())
    }

    fn parameter_count() -> usize {
        2 // rod_half_saturation + cone_half_saturation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConeChannel;

    #[test]
    fn test_response_at_half_saturation() {
        let model = SaturatingModel::new();
        assert_eq!(model.response(0, 10.0), 0.0);
        assert!((model.response(10, 10.0) - 0.5).abs() < 1e-12);
        assert!((model.response(30, 10.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_dark_gives_resting_potential_exactly() {
        let model = SaturatingModel::new();
        let range = PotentialRange::PHOTORECEPTOR;
        assert_eq!(model.transduce(0, 10.0, &range), range.resting);
        assert_eq!(model.transduce(0, 100.0, &range), range.resting);
    }

    #[test]
    fn test_bright_light_approaches_but_never_reaches_saturation() {
        let model = SaturatingModel::new();
        let range = PotentialRange::PHOTORECEPTOR;
        let v = model.transduce(u32::MAX, 10.0, &range);
        assert!(v != range.saturated);
        assert!(range.distance_to_saturation(v) < 1e-6);
    }

    #[test]
    fn test_half_saturation_potential() {
        // K photons: response 0.5, halfway between -40 and -70
        let model = SaturatingModel::new();
        let v = model.transduce(100, 100.0, &PotentialRange::PHOTORECEPTOR);
        assert!((v - -55.0).abs() < 1e-9);
    }

    #[test]
    fn test_parameters_validation() {
        assert!(TransductionParameters::default().validate().is_ok());
        assert!(TransductionParameters::with_values(0.0, 100.0).validate().is_err());
        assert!(TransductionParameters::with_values(10.0, f64::NAN).validate().is_err());
        assert!(TransductionParameters::with_values(100.0, 10.0).validate().is_err());
    }

    #[test]
    fn test_half_saturation_per_variant() {
        let params = TransductionParameters::default();
        assert_eq!(params.half_saturation(PhotoreceptorVariant::Rod), 10.0);
        assert_eq!(
            params.half_saturation(PhotoreceptorVariant::Cone(ConeChannel::Blue)),
            100.0
        );
    }
}
