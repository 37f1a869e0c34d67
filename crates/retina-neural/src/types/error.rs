// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for cell operations

use super::ids::CellId;

/// Errors raised by cell-level operations.
///
/// All of these are local precondition violations. They are returned to the
/// caller immediately and never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NeuralError {
    #[error("Invalid stimulus: photon count must be non-negative, got {photons}")]
    InvalidStimulus { photons: i32 },

    #[error("Empty aggregation input: {0} has no center or surround inputs")]
    EmptyAggregationInput(CellId),

    #[error("Cell not found: {0}")]
    CellNotFound(CellId),

    #[error("Not a photoreceptor: {0}")]
    NotAPhotoreceptor(CellId),

    #[error("Invalid model parameters: {0}")]
    InvalidParameters(&'static str),
}

pub type NeuralResult<T> = Result<T, NeuralError>;
