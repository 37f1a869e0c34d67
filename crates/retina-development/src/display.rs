// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Text maps of a cell grid, one line per row.
*/

use retina_neural::CellArena;

use crate::grid::CellGrid;
use crate::types::DevResult;

fn render<F>(arena: &CellArena, grid: &CellGrid, mut cell_text: F) -> DevResult<String>
where
    F: FnMut(&retina_neural::Cell) -> String,
{
    let dims = grid.dimensions();
    let mut out = String::with_capacity(dims.cell_count() * 2 + dims.rows);
    for row in grid.view().rows() {
        for &id in row {
            out.push_str(&cell_text(arena.get(id)?));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Cell-type symbols: `R` rod, `C` cone, `B` bipolar, `G` ganglion
pub fn type_map(arena: &CellArena, grid: &CellGrid) -> DevResult<String> {
    render(arena, grid, |cell| cell.cell_type().symbol().to_string())
}

/// Cone channel symbols (`R`, `G`, `B`); blank for anything that is not a cone
pub fn channel_map(arena: &CellArena, grid: &CellGrid) -> DevResult<String> {
    render(arena, grid, |cell| {
        cell.as_photoreceptor()
            .and_then(|p| p.rgb())
            .map_or(' ', |channel| channel.symbol())
            .to_string()
    })
}

/// Potentials, right-aligned with `precision` decimals
pub fn potential_map(arena: &CellArena, grid: &CellGrid, precision: usize) -> DevResult<String> {
    render(arena, grid, |cell| {
        format!("{:>width$.precision$}", cell.potential(), width = precision + 6)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_photoreceptor_grid;
    use crate::types::GridDimensions;
    use retina_neural::{PotentialRange, TransductionParameters};

    fn four_by_four() -> (CellArena, CellGrid) {
        let mut arena = CellArena::new();
        let grid = build_photoreceptor_grid(
            &mut arena,
            GridDimensions::new(4, 4),
            TransductionParameters::default(),
            PotentialRange::PHOTORECEPTOR,
        )
        .unwrap();
        (arena, grid)
    }

    #[test]
    fn test_type_map_checkerboard() {
        let (arena, grid) = four_by_four();
        assert_eq!(type_map(&arena, &grid).unwrap(), "RCRC\nCRCR\nRCRC\nCRCR\n");
    }

    #[test]
    fn test_channel_map_cycles() {
        let (arena, grid) = four_by_four();
        assert_eq!(
            channel_map(&arena, &grid).unwrap(),
            " R B\nG R \n B G\nR B \n"
        );
    }

    #[test]
    fn test_potential_map_resting() {
        let mut arena = CellArena::new();
        let grid = build_photoreceptor_grid(
            &mut arena,
            GridDimensions::new(1, 2),
            TransductionParameters::default(),
            PotentialRange::PHOTORECEPTOR,
        )
        .unwrap();
        assert_eq!(potential_map(&arena, &grid, 2).unwrap(), "  -40.00  -40.00\n");
    }
}
