// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Center/surround receptive-field wiring.

For each whole tile of the photoreceptor grid one bipolar cell is created in
the arena. Its center input is the tile's exact center photoreceptor and its
surround inputs are the remaining `block² - 1` photoreceptors of the tile in
row-major order. Bipolar cells only hold handles; the photoreceptors stay
owned by the arena.
*/

use ndarray::ArrayView2;
use retina_neural::{Cell, CellArena, CellId, PotentialRange};
use tracing::{info, trace};

use super::tiling::{center_offset, tile_layout};
use crate::grid::CellGrid;
use crate::types::DevResult;

/// Center and surround handles of one tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceptiveField {
    pub center: Vec<CellId>,
    pub surround: Vec<CellId>,
}

impl ReceptiveField {
    /// Split a square odd-sized tile into its center and surround
    pub fn from_tile(tile: ArrayView2<'_, CellId>) -> Self {
        let center_pos = center_offset(tile.nrows());
        let mut center = Vec::with_capacity(1);
        let mut surround = Vec::with_capacity(tile.len().saturating_sub(1));
        for (pos, &id) in tile.indexed_iter() {
            if pos == center_pos {
                center.push(id);
            } else {
                surround.push(id);
            }
        }
        Self { center, surround }
    }
}

/// Wire one bipolar cell per tile using the default bipolar range
pub fn wire_receptive_fields(
    arena: &mut CellArena,
    photoreceptors: &CellGrid,
    block_size: usize,
) -> DevResult<CellGrid> {
    wire_receptive_fields_with_range(arena, photoreceptors, block_size, PotentialRange::BIPOLAR)
}

/// Wire one bipolar cell per tile.
///
/// Returns the bipolar grid, `rows / block_size × cols / block_size`.
///
/// # Errors
///
/// `MisalignedWiring` for an even block size or a block larger than the grid.
pub fn wire_receptive_fields_with_range(
    arena: &mut CellArena,
    photoreceptors: &CellGrid,
    block_size: usize,
    range: PotentialRange,
) -> DevResult<CellGrid> {
    let tiles = tile_layout(photoreceptors.dimensions(), block_size)?;

    let mut bipolars = Vec::with_capacity(tiles.cell_count());
    for tile_row in 0..tiles.rows {
        for tile_col in 0..tiles.cols {
            let origin = (tile_row * block_size, tile_col * block_size);
            let field = ReceptiveField::from_tile(photoreceptors.window(origin, block_size));
            trace!(
                target: "retina-development",
                "Tile ({}, {}): center {:?}, {} surround",
                tile_row,
                tile_col,
                field.center,
                field.surround.len()
            );
            let bipolar = Cell::bipolar(range).with_inputs(field.center, field.surround);
            bipolars.push(arena.insert(bipolar)?);
        }
    }

    info!(
        target: "retina-development",
        "Wired {} bipolar cells ({}x{} tiles of {}x{})",
        bipolars.len(),
        tiles.rows,
        tiles.cols,
        block_size,
        block_size
    );

    CellGrid::from_row_major(tiles, bipolars)
}
