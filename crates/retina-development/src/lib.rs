// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Retina Development

Builds the photoreceptor layer and wires the bipolar layer over it.

## Pipeline

```text
PhotoreceptorBuilder::build_grid   rods on even row+col, cones (R, B, G, ...) on odd
        │
        ▼
wire_receptive_fields             one bipolar per odd-sized tile: center + surround
        │
        ▼
Retina::step                      transduce every photoreceptor, then aggregate
```

Every cell lives in a single `CellArena`; grids hold `CellId` handles only.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod builder;
pub mod connectivity;
pub mod display;
pub mod grid;
pub mod retina;
pub mod types;

pub use builder::{
    build_photoreceptor_grid, photoreceptor_variant_at, ConeSequence, PhotoreceptorBuilder,
};
pub use connectivity::{
    tile_layout, wire_receptive_fields, wire_receptive_fields_with_range, ReceptiveField,
};
pub use grid::CellGrid;
pub use retina::{BipolarSnapshot, PhotoreceptorSnapshot, Retina, RetinaParameters, RetinaSnapshot};
pub use types::{DevError, DevResult, GridDimensions, GridPosition};
