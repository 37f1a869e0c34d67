// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Traits shared by transduction models

use crate::types::PotentialRange;

/// A photoreceptor transduction curve.
///
/// Splits transduction into the dimensionless response (0 for darkness,
/// approaching 1 under unbounded light) and its mapping onto the cell's
/// potential range.
pub trait TransductionModel {
    /// Human-readable model name
    fn model_name(&self) -> &'static str;

    /// Dimensionless response in `[0, 1)` for `photons` at half-saturation `k`
    fn response(&self, photons: u32, half_saturation: f64) -> f64;

    /// Map a response onto `range`
    fn membrane_potential(&self, response: f64, range: &PotentialRange) -> f64;

    /// Full transduction: photons to membrane potential
    #[inline]
    fn transduce(&self, photons: u32, half_saturation: f64, range: &PotentialRange) -> f64 {
        self.membrane_potential(self.response(photons, half_saturation), range)
    }
}

/// Validation contract for model parameter sets
pub trait ModelParameters {
    fn validate(&self) -> Result<(), &'static str>;

    fn parameter_count() -> usize;
}
