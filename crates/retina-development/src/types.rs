// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Core types for retina development operations.
*/

use retina_neural::NeuralError;

/// 2-D grid position (row, col)
pub type GridPosition = (usize, usize);

/// Grid extent in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, (row, col): GridPosition) -> bool {
        row < self.rows && col < self.cols
    }
}

impl From<(usize, usize)> for GridDimensions {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// Result type for development operations
pub type DevResult<T> = Result<T, DevError>;

/// Errors that can occur while building or wiring a retina
#[derive(Debug, thiserror::Error)]
pub enum DevError {
    #[error("Misaligned wiring: block size {block_size} on a {rows}x{cols} grid ({reason})")]
    MisalignedWiring {
        block_size: usize,
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    #[error("Out of bounds: position {pos:?} not in dimensions {dims:?}")]
    OutOfBounds {
        pos: GridPosition,
        dims: GridDimensions,
    },

    #[error(transparent)]
    Neural(#[from] NeuralError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ndarray::ShapeError> for DevError {
    fn from(err: ndarray::ShapeError) -> Self {
        DevError::Internal(err.to_string())
    }
}
