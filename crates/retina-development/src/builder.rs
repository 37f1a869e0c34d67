// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Photoreceptor grid construction.

Each position gets a rod or a cone from the parity of `row + col`. Cones take
their spectral channel from a running sequence (Red, Blue, Green, repeating)
that advances once per cone produced, independent of where that cone sits.
The sequence is explicit builder state, so a fresh builder always reproduces
the same grid.
*/

use retina_neural::{
    Cell, CellArena, ConeChannel, Photoreceptor, PhotoreceptorVariant, PotentialRange,
    TransductionParameters,
};
use tracing::{debug, trace};

use crate::grid::CellGrid;
use crate::types::{DevResult, GridDimensions};

/// Running cone-channel counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConeSequence {
    produced: u64,
}

impl ConeSequence {
    /// Channel order, repeating
    pub const ORDER: [ConeChannel; 3] = [ConeChannel::Red, ConeChannel::Blue, ConeChannel::Green];

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cones produced so far
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Channel the next cone will get
    pub fn peek(&self) -> ConeChannel {
        Self::ORDER[(self.produced % Self::ORDER.len() as u64) as usize]
    }

    /// Channel for the next cone together with the advanced sequence
    pub fn advance(self) -> (ConeChannel, ConeSequence) {
        (
            self.peek(),
            ConeSequence {
                produced: self.produced + 1,
            },
        )
    }
}

/// Variant at `(row, col)` given the running cone sequence.
///
/// Pure: returns the advanced sequence rather than mutating shared state.
pub fn photoreceptor_variant_at(
    row: usize,
    col: usize,
    sequence: ConeSequence,
) -> (PhotoreceptorVariant, ConeSequence) {
    if (row + col) % 2 == 0 {
        (PhotoreceptorVariant::Rod, sequence)
    } else {
        let (channel, next) = sequence.advance();
        (PhotoreceptorVariant::Cone(channel), next)
    }
}

/// Builds photoreceptors position by position
#[derive(Debug, Clone)]
pub struct PhotoreceptorBuilder {
    params: TransductionParameters,
    range: PotentialRange,
    sequence: ConeSequence,
}

impl PhotoreceptorBuilder {
    pub fn new(params: TransductionParameters, range: PotentialRange) -> Self {
        Self {
            params,
            range,
            sequence: ConeSequence::new(),
        }
    }

    pub fn params(&self) -> &TransductionParameters {
        &self.params
    }

    pub fn range(&self) -> PotentialRange {
        self.range
    }

    pub fn sequence(&self) -> ConeSequence {
        self.sequence
    }

    /// Restart the cone sequence at Red
    pub fn reset(&mut self) {
        self.sequence = ConeSequence::new();
    }

    /// Photoreceptor for `(row, col)`. Never fails.
    pub fn build(&mut self, row: usize, col: usize) -> Photoreceptor {
        let (variant, next) = photoreceptor_variant_at(row, col, self.sequence);
        self.sequence = next;
        trace!(target: "retina-development", "({}, {}) -> {:?}", row, col, variant);
        Photoreceptor::new(variant, &self.params)
    }

    /// Build a full grid row by row, inserting every photoreceptor into `arena`
    pub fn build_grid(&mut self, arena: &mut CellArena, dims: GridDimensions) -> DevResult<CellGrid> {
        let mut ids = Vec::with_capacity(dims.cell_count());
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let photoreceptor = self.build(row, col);
                ids.push(arena.insert(Cell::photoreceptor(photoreceptor, self.range))?);
            }
        }

        debug!(
            target: "retina-development",
            "Built {}x{} photoreceptor grid ({} cones so far)",
            dims.rows,
            dims.cols,
            self.sequence.produced()
        );

        CellGrid::from_row_major(dims, ids)
    }
}

impl Default for PhotoreceptorBuilder {
    fn default() -> Self {
        Self::new(TransductionParameters::default(), PotentialRange::PHOTORECEPTOR)
    }
}

/// Build a `rows × cols` photoreceptor grid with a fresh builder
pub fn build_photoreceptor_grid(
    arena: &mut CellArena,
    dims: GridDimensions,
    params: TransductionParameters,
    range: PotentialRange,
) -> DevResult<CellGrid> {
    PhotoreceptorBuilder::new(params, range).build_grid(arena, dims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles_red_blue_green() {
        let mut sequence = ConeSequence::new();
        let mut channels = Vec::new();
        for _ in 0..7 {
            let (channel, next) = sequence.advance();
            channels.push(channel);
            sequence = next;
        }
        assert_eq!(
            channels,
            vec![
                ConeChannel::Red,
                ConeChannel::Blue,
                ConeChannel::Green,
                ConeChannel::Red,
                ConeChannel::Blue,
                ConeChannel::Green,
                ConeChannel::Red,
            ]
        );
        assert_eq!(sequence.produced(), 7);
    }

    #[test]
    fn test_rods_do_not_advance_sequence() {
        let sequence = ConeSequence::new();
        let (variant, next) = photoreceptor_variant_at(2, 4, sequence);
        assert_eq!(variant, PhotoreceptorVariant::Rod);
        assert_eq!(next, sequence);
    }

    #[test]
    fn test_channel_ignores_position() {
        // The first cone is red wherever it lands
        for (row, col) in [(0, 1), (7, 0), (3, 8)] {
            let (variant, _) = photoreceptor_variant_at(row, col, ConeSequence::new());
            assert_eq!(variant, PhotoreceptorVariant::Cone(ConeChannel::Red));
        }
    }

    #[test]
    fn test_reset_restarts_at_red() {
        let mut builder = PhotoreceptorBuilder::default();
        builder.build(0, 1);
        builder.build(0, 3);
        assert_eq!(builder.sequence().peek(), ConeChannel::Green);
        builder.reset();
        assert_eq!(builder.build(1, 0).rgb(), Some(ConeChannel::Red));
    }

    #[test]
    fn test_half_saturation_comes_from_params() {
        let params = TransductionParameters::with_values(5.0, 80.0);
        let mut builder = PhotoreceptorBuilder::new(params, PotentialRange::PHOTORECEPTOR);
        assert_eq!(builder.build(0, 0).half_saturation(), 5.0);
        assert_eq!(builder.build(0, 1).half_saturation(), 80.0);
    }
}
