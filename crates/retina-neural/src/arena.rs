// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cell Arena
//!
//! Single owner of every cell in a run. Cells refer to one another by
//! [`CellId`]; a cell may only reference cells inserted before it, so the
//! reference graph is acyclic and every handle stays valid for the arena's
//! lifetime.

use crate::cells::{Cell, CellKind, InputPotentials, Photoreceptor};
use crate::types::{CellId, NeuralError, NeuralResult};

#[derive(Debug, Clone, Default)]
pub struct CellArena {
    cells: Vec<Cell>,
}

impl CellArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of `cell` and return its handle.
    ///
    /// Every input reference must point at a cell already in the arena.
    pub fn insert(&mut self, cell: Cell) -> NeuralResult<CellId> {
        let id = CellId(self.cells.len() as u32);
        if let Some(missing) = cell.inputs().find(|input| input.index() >= self.cells.len()) {
            return Err(NeuralError::CellNotFound(missing));
        }
        self.cells.push(cell);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, id: CellId) -> NeuralResult<&Cell> {
        self.cells
            .get(id.index())
            .ok_or(NeuralError::CellNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (CellId(idx as u32), cell))
    }

    pub fn potential(&self, id: CellId) -> NeuralResult<f64> {
        Ok(self.get(id)?.potential())
    }

    pub fn photoreceptor(&self, id: CellId) -> NeuralResult<&Photoreceptor> {
        self.get(id)?
            .as_photoreceptor()
            .ok_or(NeuralError::NotAPhotoreceptor(id))
    }

    pub fn photoreceptor_mut(&mut self, id: CellId) -> NeuralResult<&mut Photoreceptor> {
        self.cells
            .get_mut(id.index())
            .ok_or(NeuralError::CellNotFound(id))?
            .as_photoreceptor_mut()
            .ok_or(NeuralError::NotAPhotoreceptor(id))
    }

    /// Record a stimulus on the photoreceptor `id`
    pub fn set_inputs(
        &mut self,
        id: CellId,
        photons: i32,
        frequency: i32,
        angle: i32,
    ) -> NeuralResult<()> {
        self.photoreceptor_mut(id)?
            .set_inputs(photons, frequency, angle)
    }

    /// Read the current potentials of `id`'s center and surround inputs.
    ///
    /// Inputs are read as they stand; nothing upstream is recomputed.
    pub fn acquire_inputs(&self, id: CellId) -> NeuralResult<InputPotentials> {
        let cell = self.get(id)?;
        let read = |ids: &[CellId]| -> NeuralResult<Vec<f64>> {
            ids.iter().map(|&input| self.potential(input)).collect()
        };
        Ok(InputPotentials {
            center: read(cell.center_inputs())?,
            surround: read(cell.surround_inputs())?,
        })
    }

    /// Recompute the potential of `id` and return it.
    ///
    /// Photoreceptors transduce their current stimulus. Bipolar and ganglion
    /// cells take the pooled average of their inputs and fail with
    /// `EmptyAggregationInput` when they have none. `_ticks` is accepted for
    /// interface stability; there is a single discrete update.
    pub fn update(&mut self, id: CellId, _ticks: u32) -> NeuralResult<f64> {
        let cell = self.get(id)?;
        let next = match cell.kind() {
            CellKind::Photoreceptor(p) => p.transduce(cell.range()),
            CellKind::Bipolar | CellKind::Ganglion => self
                .acquire_inputs(id)?
                .pooled_average()
                .ok_or(NeuralError::EmptyAggregationInput(id))?,
        };
        self.cells[id.index()].set_potential(next);
        Ok(next)
    }
}
