// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Membrane potential ranges

/// Interpolation range of a cell's membrane potential.
///
/// `resting` is the baseline (the `min` end) and `saturated` is the value
/// approached under unbounded drive (the `max` end). The two are not ordered:
/// photoreceptors hyperpolarise under light, so their saturated value is
/// numerically below the resting one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialRange {
    pub resting: f64,
    pub saturated: f64,
}

impl PotentialRange {
    /// Dark-adapted photoreceptor (-40 mV) hyperpolarising toward -70 mV
    pub const PHOTORECEPTOR: PotentialRange = PotentialRange::new(-40.0, -70.0);

    /// Bipolar cell range; the resting value matches the photoreceptor baseline
    pub const BIPOLAR: PotentialRange = PotentialRange::new(-40.0, -70.0);

    pub const fn new(resting: f64, saturated: f64) -> Self {
        Self { resting, saturated }
    }

    /// Signed distance from `resting` to `saturated`
    #[inline]
    pub fn span(&self) -> f64 {
        self.saturated - self.resting
    }

    /// Potential at `fraction` of the way from `resting` to `saturated`.
    ///
    /// `fraction = 0` returns `resting` exactly.
    #[inline]
    pub fn interpolate(&self, fraction: f64) -> f64 {
        self.resting + fraction * self.span()
    }

    /// True if `potential` lies between the two endpoints (inclusive),
    /// whichever way round they are.
    pub fn contains(&self, potential: f64) -> bool {
        let lo = self.resting.min(self.saturated);
        let hi = self.resting.max(self.saturated);
        potential >= lo && potential <= hi
    }

    /// True if both endpoints of `other` lie within this range
    pub fn covers(&self, other: &PotentialRange) -> bool {
        self.contains(other.resting) && self.contains(other.saturated)
    }

    /// Absolute distance of `potential` from the saturated end
    #[inline]
    pub fn distance_to_saturation(&self, potential: f64) -> f64 {
        (self.saturated - potential).abs()
    }
}

impl Default for PotentialRange {
    fn default() -> Self {
        Self::PHOTORECEPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_endpoints() {
        let range = PotentialRange::new(-40.0, -70.0);
        assert_eq!(range.interpolate(0.0), -40.0);
        assert_eq!(range.interpolate(1.0), -70.0);
        assert_eq!(range.interpolate(0.5), -55.0);
    }

    #[test]
    fn test_contains_either_orientation() {
        let falling = PotentialRange::new(-40.0, -70.0);
        assert!(falling.contains(-40.0));
        assert!(falling.contains(-55.5));
        assert!(falling.contains(-70.0));
        assert!(!falling.contains(-30.0));

        let rising = PotentialRange::new(0.0, 1.0);
        assert!(rising.contains(0.25));
        assert!(!rising.contains(-0.01));
    }

    #[test]
    fn test_covers() {
        let photoreceptor = PotentialRange::PHOTORECEPTOR;
        assert!(photoreceptor.covers(&photoreceptor));
        assert!(PotentialRange::new(-75.0, -35.0).covers(&photoreceptor));
        assert!(!PotentialRange::new(-45.0, -65.0).covers(&photoreceptor));
        assert!(!photoreceptor.covers(&PotentialRange::new(-40.0, -80.0)));
    }
}
