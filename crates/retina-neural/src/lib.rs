// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Retina Cell Model
//!
//! All per-cell computation in one place:
//! - **Types**: identifiers, spectral channels, potential ranges, stimuli, errors
//! - **Models**: the saturating photoreceptor transduction curve
//! - **Cells**: the closed set of cell variants (rod, cone, bipolar, ganglion)
//! - **Arena**: single owner of every cell; cells reference each other by [`CellId`]
//!
//! ## Update policy
//!
//! ```text
//! Photoreceptor (rod / cone):
//!     normalized = photons / K
//!     response   = normalized / (normalized + 1)
//!     V          = resting + response × (saturated - resting)
//!
//! Aggregating cell (bipolar / ganglion):
//!     V = (Σ center + Σ surround) / (|center| + |surround|)
//! ```
//!
//! Aggregation reads potentials that were already computed. Callers must
//! update every photoreceptor before the aggregating cells that read it.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod arena;
pub mod cells;
pub mod models;
pub mod types;

pub use arena::CellArena;
pub use cells::{Cell, CellKind, InputPotentials, Photoreceptor, PhotoreceptorVariant};
pub use models::{ModelParameters, SaturatingModel, TransductionModel, TransductionParameters};
pub use types::{
    CellId, CellType, ConeChannel, NeuralError, NeuralResult, PhotoreceptorType, PotentialRange,
    Stimulus,
};
