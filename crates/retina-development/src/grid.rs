// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Row-major 2-D layout of cell handles.

A `CellGrid` owns no cells; it maps grid positions to [`CellId`]s in the
`CellArena` that does.
*/

use ndarray::{s, Array2, ArrayView2};
use retina_neural::{CellArena, CellId};

use crate::types::{DevError, DevResult, GridDimensions, GridPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    cells: Array2<CellId>,
}

impl CellGrid {
    /// Lay `ids` out row-major over `dims`
    pub fn from_row_major(dims: GridDimensions, ids: Vec<CellId>) -> DevResult<Self> {
        Ok(Self {
            cells: Array2::from_shape_vec((dims.rows, dims.cols), ids)?,
        })
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.cells.dim().into()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellId> {
        self.cells.get((row, col)).copied()
    }

    pub fn at(&self, pos: GridPosition) -> DevResult<CellId> {
        self.get(pos.0, pos.1).ok_or(DevError::OutOfBounds {
            pos,
            dims: self.dimensions(),
        })
    }

    /// Positions and handles in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, CellId)> + '_ {
        self.cells.indexed_iter().map(|(pos, &id)| (pos, id))
    }

    pub fn view(&self) -> ArrayView2<'_, CellId> {
        self.cells.view()
    }

    /// Square `block × block` window whose top-left corner is `origin`
    pub(crate) fn window(&self, origin: GridPosition, block: usize) -> ArrayView2<'_, CellId> {
        let (row, col) = origin;
        self.cells.slice(s![row..row + block, col..col + block])
    }

    /// Current potential of every cell, laid out like the grid
    pub fn potentials(&self, arena: &CellArena) -> DevResult<Array2<f64>> {
        let mut out = Array2::<f64>::zeros(self.cells.dim());
        for (pos, &id) in self.cells.indexed_iter() {
            out[pos] = arena.potential(id)?;
        }
        Ok(out)
    }
}
