// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Retina: arena, photoreceptor grid and bipolar grid for one run.

Convenience owner for drivers. It sequences the two update phases
(`transduce` for every photoreceptor, then `aggregate` for every bipolar)
in [`Retina::step`]; callers that drive the phases separately are
responsible for the same order.
*/

use ndarray::Array2;
use retina_neural::{
    CellArena, CellId, CellType, ConeChannel, ModelParameters, NeuralError, PotentialRange,
    Stimulus, TransductionParameters,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::builder::PhotoreceptorBuilder;
use crate::connectivity::wire_receptive_fields_with_range;
use crate::grid::CellGrid;
use crate::types::{DevResult, GridDimensions};

/// Everything needed to build and wire a retina
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetinaParameters {
    pub dimensions: GridDimensions,
    pub block_size: usize,
    pub transduction: TransductionParameters,
    pub photoreceptor_range: PotentialRange,
    pub bipolar_range: PotentialRange,
}

impl Default for RetinaParameters {
    fn default() -> Self {
        Self {
            dimensions: GridDimensions::new(10, 10),
            block_size: 3,
            transduction: TransductionParameters::default(),
            photoreceptor_range: PotentialRange::PHOTORECEPTOR,
            bipolar_range: PotentialRange::BIPOLAR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Retina {
    arena: CellArena,
    photoreceptors: CellGrid,
    bipolars: CellGrid,
    block_size: usize,
}

impl Retina {
    /// Build the photoreceptor grid, then wire the bipolar layer over it
    pub fn new(params: &RetinaParameters) -> DevResult<Self> {
        params
            .transduction
            .validate()
            .map_err(NeuralError::InvalidParameters)?;
        // Bipolar potentials are averages of photoreceptor potentials
        if !params.bipolar_range.covers(&params.photoreceptor_range) {
            return Err(NeuralError::InvalidParameters(
                "bipolar range must contain the photoreceptor range",
            )
            .into());
        }

        let dims = params.dimensions;
        let mut arena = CellArena::with_capacity(
            dims.cell_count()
                + dims
                    .cell_count()
                    .checked_div(params.block_size * params.block_size)
                    .unwrap_or(0),
        );

        let mut builder = PhotoreceptorBuilder::new(params.transduction, params.photoreceptor_range);
        let photoreceptors = builder.build_grid(&mut arena, dims)?;
        let bipolars = wire_receptive_fields_with_range(
            &mut arena,
            &photoreceptors,
            params.block_size,
            params.bipolar_range,
        )?;

        info!(
            target: "retina-development",
            "Retina ready: {} photoreceptors, {} bipolar cells",
            photoreceptors.len(),
            bipolars.len()
        );

        Ok(Self {
            arena,
            photoreceptors,
            bipolars,
            block_size: params.block_size,
        })
    }

    pub fn arena(&self) -> &CellArena {
        &self.arena
    }

    pub fn photoreceptors(&self) -> &CellGrid {
        &self.photoreceptors
    }

    pub fn bipolars(&self) -> &CellGrid {
        &self.bipolars
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Record a stimulus on the photoreceptor at `(row, col)`
    pub fn apply_stimulus(
        &mut self,
        row: usize,
        col: usize,
        photons: i32,
        frequency: i32,
        angle: i32,
    ) -> DevResult<()> {
        let id = self.photoreceptors.at((row, col))?;
        self.arena.set_inputs(id, photons, frequency, angle)?;
        Ok(())
    }

    /// Record the same stimulus on every photoreceptor.
    ///
    /// Validated once up front, so a negative photon count leaves every
    /// photoreceptor untouched.
    pub fn apply_uniform_stimulus(&mut self, photons: i32, frequency: i32, angle: i32) -> DevResult<()> {
        let stimulus = Stimulus::new(photons, frequency, angle)?;
        for (_, id) in self.photoreceptors.iter() {
            self.arena.photoreceptor_mut(id)?.set_stimulus(stimulus);
        }
        debug!(target: "retina-development", "Uniform stimulus applied: {:?}", stimulus);
        Ok(())
    }

    /// Update every photoreceptor from its current stimulus
    pub fn transduce(&mut self, ticks: u32) -> DevResult<()> {
        for (_, id) in self.photoreceptors.iter() {
            self.arena.update(id, ticks)?;
        }
        debug!(target: "retina-development", "Transduced {} photoreceptors", self.photoreceptors.len());
        Ok(())
    }

    /// Update every bipolar cell from the photoreceptor potentials as they stand
    pub fn aggregate(&mut self, ticks: u32) -> DevResult<()> {
        for (_, id) in self.bipolars.iter() {
            self.arena.update(id, ticks)?;
        }
        debug!(target: "retina-development", "Aggregated {} bipolar cells", self.bipolars.len());
        Ok(())
    }

    /// Transduce, then aggregate
    pub fn step(&mut self, ticks: u32) -> DevResult<()> {
        self.transduce(ticks)?;
        self.aggregate(ticks)
    }

    pub fn photoreceptor_potential(&self, row: usize, col: usize) -> DevResult<f64> {
        Ok(self.arena.potential(self.photoreceptors.at((row, col))?)?)
    }

    pub fn bipolar_potential(&self, row: usize, col: usize) -> DevResult<f64> {
        Ok(self.arena.potential(self.bipolars.at((row, col))?)?)
    }

    pub fn photoreceptor_potentials(&self) -> DevResult<Array2<f64>> {
        self.photoreceptors.potentials(&self.arena)
    }

    pub fn bipolar_potentials(&self) -> DevResult<Array2<f64>> {
        self.bipolars.potentials(&self.arena)
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> DevResult<RetinaSnapshot> {
        let mut photoreceptors = Vec::with_capacity(self.photoreceptors.len());
        for ((row, col), id) in self.photoreceptors.iter() {
            let cell = self.arena.get(id)?;
            let receptor = self.arena.photoreceptor(id)?;
            photoreceptors.push(PhotoreceptorSnapshot {
                row,
                col,
                id,
                cell_type: cell.cell_type(),
                channel: receptor.rgb(),
                photons: receptor.photons_hit(),
                potential: cell.potential(),
            });
        }

        let mut bipolars = Vec::with_capacity(self.bipolars.len());
        for ((row, col), id) in self.bipolars.iter() {
            let cell = self.arena.get(id)?;
            bipolars.push(BipolarSnapshot {
                row,
                col,
                id,
                center: cell.center_inputs().to_vec(),
                surround: cell.surround_inputs().to_vec(),
                potential: cell.potential(),
            });
        }

        let dims = self.photoreceptors.dimensions();
        Ok(RetinaSnapshot {
            rows: dims.rows,
            cols: dims.cols,
            block_size: self.block_size,
            photoreceptors,
            bipolars,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetinaSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub block_size: usize,
    pub photoreceptors: Vec<PhotoreceptorSnapshot>,
    pub bipolars: Vec<BipolarSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoreceptorSnapshot {
    pub row: usize,
    pub col: usize,
    pub id: CellId,
    pub cell_type: CellType,
    pub channel: Option<ConeChannel>,
    pub photons: u32,
    pub potential: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BipolarSnapshot {
    pub row: usize,
    pub col: usize,
    pub id: CellId,
    pub center: Vec<CellId>,
    pub surround: Vec<CellId>,
    pub potential: f64,
}
