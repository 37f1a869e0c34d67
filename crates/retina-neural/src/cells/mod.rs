// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cells
//!
//! The variant set is closed: rods and cones transduce light, bipolar cells
//! aggregate a receptive field, and ganglion cells are a placeholder that only
//! has the default pooled-average update.

pub mod aggregation;
pub mod cell;
pub mod photoreceptor;

pub use aggregation::InputPotentials;
pub use cell::{Cell, CellKind};
pub use photoreceptor::{Photoreceptor, PhotoreceptorVariant};
