// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cell Types Module
//!
//! Core type definitions shared by the cell model and the development crate.

pub mod error;
pub mod ids;
pub mod potential;
pub mod spectral;
pub mod stimulus;

pub use error::{NeuralError, NeuralResult};
pub use ids::CellId;
pub use potential::PotentialRange;
pub use spectral::{CellType, ConeChannel, PhotoreceptorType};
pub use stimulus::Stimulus;
