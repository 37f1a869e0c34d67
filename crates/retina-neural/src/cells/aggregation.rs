// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Receptive-field input pools

/// Potentials read from a cell's center and surround inputs, in wiring order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputPotentials {
    pub center: Vec<f64>,
    pub surround: Vec<f64>,
}

impl InputPotentials {
    pub fn len(&self) -> usize {
        self.center.len() + self.surround.len()
    }

    pub fn is_empty(&self) -> bool {
        self.center.is_empty() && self.surround.is_empty()
    }

    /// `(Σ center + Σ surround) / (|center| + |surround|)`, or `None` when
    /// both pools are empty.
    pub fn pooled_average(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let total: f64 = self.center.iter().chain(self.surround.iter()).sum();
        Some(total / self.len() as f64)
    }
}
