// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Retina - retinal signal pathway
//!
//! Photoreceptors (rods and cones) transduce photons into graded membrane
//! potentials; bipolar cells pool a square block of them (one center cell,
//! the rest surround) and settle at the average.
//!
//! This umbrella crate re-exports the workspace members:
//!
//! - [`neural`]: cells, the saturating transduction model, the cell arena
//! - [`development`]: grid builder, receptive-field wiring, the `Retina` facade
//! - [`config`]: `retina_configuration.toml` loading and validation
//! - [`observability`]: logging setup and per-crate debug flags
//!
//! ## Usage
//!
//! ```rust
//! use retina::prelude::*;
//!
//! let mut retina = Retina::new(&RetinaParameters::default())?;
//! retina.apply_uniform_stimulus(50, 550, 0)?;
//! retina.step(1)?;
//!
//! let v = retina.bipolar_potential(0, 0)?;
//! assert!(v < -40.0 && v > -70.0);
//! # Ok::<(), retina::development::DevError>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use retina_config as config;
pub use retina_development as development;
pub use retina_neural as neural;
pub use retina_observability as observability;

pub mod setup;

/// Commonly used items
pub mod prelude {
    pub use retina_development::{
        display, DevError, DevResult, GridDimensions, Retina, RetinaParameters, RetinaSnapshot,
    };
    pub use retina_neural::{
        CellArena, CellId, CellType, ConeChannel, NeuralError, PhotoreceptorType, PotentialRange,
        TransductionParameters,
    };

    pub use crate::setup::{logging_config, retina_parameters};
}
