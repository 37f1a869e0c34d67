// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Block tiling rules.

A block must be odd-sized so that it has an exact center. Rows and columns
that do not fill a whole block are dropped; a grid with no whole block at all
is rejected.
*/

use tracing::warn;

use crate::types::{DevError, DevResult, GridDimensions};

/// Number of whole `block_size × block_size` tiles along each axis.
///
/// # Errors
///
/// `MisalignedWiring` if `block_size` is even (including zero) or larger than
/// either grid dimension.
pub fn tile_layout(dims: GridDimensions, block_size: usize) -> DevResult<GridDimensions> {
    let misaligned = |reason| DevError::MisalignedWiring {
        block_size,
        rows: dims.rows,
        cols: dims.cols,
        reason,
    };

    if block_size % 2 == 0 {
        return Err(misaligned("block size must be odd"));
    }

    let tiles = GridDimensions::new(dims.rows / block_size, dims.cols / block_size);
    if tiles.rows == 0 || tiles.cols == 0 {
        return Err(misaligned("block does not fit in the grid"));
    }

    let dropped_rows = dims.rows % block_size;
    let dropped_cols = dims.cols % block_size;
    if dropped_rows != 0 || dropped_cols != 0 {
        warn!(
            target: "retina-development",
            "Grid {}x{} is not divisible by block size {}: dropping {} trailing row(s) and {} trailing column(s) from wiring",
            dims.rows, dims.cols, block_size, dropped_rows, dropped_cols
        );
    }

    Ok(tiles)
}

/// Offset of the exact center within an odd block
#[inline]
pub fn center_offset(block_size: usize) -> (usize, usize) {
    (block_size / 2, block_size / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_block_rejected() {
        for block in [0, 2, 4] {
            let result = tile_layout(GridDimensions::new(12, 12), block);
            assert!(matches!(result, Err(DevError::MisalignedWiring { .. })));
        }
    }

    #[test]
    fn test_oversized_block_rejected() {
        let result = tile_layout(GridDimensions::new(10, 2), 3);
        assert!(matches!(
            result,
            Err(DevError::MisalignedWiring { block_size: 3, rows: 10, cols: 2, .. })
        ));
    }

    #[test]
    fn test_trailing_cells_dropped() {
        assert_eq!(
            tile_layout(GridDimensions::new(10, 10), 3).unwrap(),
            GridDimensions::new(3, 3)
        );
        assert_eq!(
            tile_layout(GridDimensions::new(9, 15), 3).unwrap(),
            GridDimensions::new(3, 5)
        );
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(1), (0, 0));
        assert_eq!(center_offset(3), (1, 1));
        assert_eq!(center_offset(5), (2, 2));
    }
}
