// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Receptive-field connectivity.

Tiles the photoreceptor grid into non-overlapping square blocks and wires one
bipolar cell per block: the block's exact center feeds the bipolar center,
everything else in the block feeds its surround.
*/

pub mod receptive_field;
pub mod tiling;

pub use receptive_field::{wire_receptive_fields, wire_receptive_fields_with_range, ReceptiveField};
pub use tiling::{center_offset, tile_layout};
