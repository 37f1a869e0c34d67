// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Receptive-Field Wiring Integration Tests

Covers the bipolar layer wired over a photoreceptor grid:
- Center/surround partition of every tile
- Boundary policy (trailing rows/columns dropped, oversized blocks rejected)
- Even block sizes rejected
- Aggregation over a wired 3x3 tile
*/

use std::collections::HashSet;

use proptest::prelude::*;
use retina_development::{
    build_photoreceptor_grid, wire_receptive_fields, CellGrid, DevError, GridDimensions,
};
use retina_neural::{CellArena, CellId, CellType, PotentialRange, TransductionParameters};

fn photoreceptor_grid(rows: usize, cols: usize) -> (CellArena, CellGrid) {
    let mut arena = CellArena::new();
    let grid = build_photoreceptor_grid(
        &mut arena,
        GridDimensions::new(rows, cols),
        TransductionParameters::default(),
        PotentialRange::PHOTORECEPTOR,
    )
    .unwrap();
    (arena, grid)
}

#[test]
fn test_even_block_size_is_misaligned() {
    let (mut arena, grid) = photoreceptor_grid(6, 6);
    let before = arena.len();
    let result = wire_receptive_fields(&mut arena, &grid, 2);
    assert!(matches!(result, Err(DevError::MisalignedWiring { block_size: 2, .. })));
    assert_eq!(arena.len(), before);
}

#[test]
fn test_block_larger_than_grid_is_misaligned() {
    let (mut arena, grid) = photoreceptor_grid(4, 4);
    assert!(matches!(
        wire_receptive_fields(&mut arena, &grid, 5),
        Err(DevError::MisalignedWiring { .. })
    ));
}

#[test]
fn test_trailing_cells_are_not_wired() {
    let (mut arena, grid) = photoreceptor_grid(10, 11);
    let bipolars = wire_receptive_fields(&mut arena, &grid, 3).unwrap();
    assert_eq!(bipolars.dimensions(), GridDimensions::new(3, 3));

    let mut referenced = HashSet::new();
    for (_, id) in bipolars.iter() {
        let cell = arena.get(id).unwrap();
        referenced.extend(cell.center_inputs().iter().copied());
        referenced.extend(cell.surround_inputs().iter().copied());
    }
    assert_eq!(referenced.len(), 81);
    assert!(!referenced.contains(&grid.get(9, 0).unwrap()));
    assert!(!referenced.contains(&grid.get(0, 9).unwrap()));
    assert!(referenced.contains(&grid.get(8, 8).unwrap()));
}

#[test]
fn test_center_is_tile_center() {
    let (mut arena, grid) = photoreceptor_grid(6, 9);
    let bipolars = wire_receptive_fields(&mut arena, &grid, 3).unwrap();

    for ((tile_row, tile_col), id) in bipolars.iter() {
        let cell = arena.get(id).unwrap();
        assert_eq!(cell.cell_type(), CellType::Bipolar);
        let expected = grid.get(tile_row * 3 + 1, tile_col * 3 + 1).unwrap();
        assert_eq!(cell.center_inputs(), &[expected]);
    }
}

#[test]
fn test_bipolar_averages_its_tile() {
    let (mut arena, grid) = photoreceptor_grid(3, 3);
    let photons = [[0, 5, 10], [20, 40, 80], [160, 320, 640]];
    for ((row, col), id) in grid.iter() {
        arena.set_inputs(id, photons[row][col], 0, 0).unwrap();
        arena.update(id, 1).unwrap();
    }
    let bipolars = wire_receptive_fields(&mut arena, &grid, 3).unwrap();
    let bipolar = bipolars.get(0, 0).unwrap();

    let inputs = arena.acquire_inputs(bipolar).unwrap();
    assert_eq!(inputs.center.len(), 1);
    assert_eq!(inputs.surround.len(), 8);

    let sum: f64 = grid.iter().map(|(_, id)| arena.potential(id).unwrap()).sum();
    let v = arena.update(bipolar, 1).unwrap();
    assert!((v - sum / 9.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn every_tile_is_partitioned(tiles_r in 1usize..4, tiles_c in 1usize..4, half in 0usize..3, extra in 0usize..5) {
        let block = 2 * half + 1;
        // A trailing remainder is always shorter than one block
        let extra = extra % block;
        let (mut arena, grid) = photoreceptor_grid(tiles_r * block + extra, tiles_c * block + extra);
        let bipolars = wire_receptive_fields(&mut arena, &grid, block).unwrap();
        prop_assert_eq!(bipolars.dimensions(), GridDimensions::new(tiles_r, tiles_c));

        let mut seen: HashSet<CellId> = HashSet::new();
        for ((tile_row, tile_col), id) in bipolars.iter() {
            let cell = arena.get(id).unwrap();
            prop_assert_eq!(cell.center_inputs().len(), 1);
            prop_assert_eq!(cell.surround_inputs().len(), block * block - 1);

            let center: HashSet<CellId> = cell.center_inputs().iter().copied().collect();
            let surround: HashSet<CellId> = cell.surround_inputs().iter().copied().collect();
            prop_assert!(center.is_disjoint(&surround));
            prop_assert_eq!(surround.len(), block * block - 1);

            // Exactly the tile's cells, each once across the whole layer
            for r in 0..block {
                for c in 0..block {
                    let pid = grid.get(tile_row * block + r, tile_col * block + c).unwrap();
                    prop_assert!(center.contains(&pid) || surround.contains(&pid));
                    prop_assert!(seen.insert(pid));
                }
            }
        }
    }
}
