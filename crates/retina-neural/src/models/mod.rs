// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Transduction Model Architecture
//!
//! Trait-based photoreceptor transduction so that alternative response curves
//! can sit next to the default saturating model.
//!
//! ## Adding a New Model
//!
//! 1. Create `src/models/your_model.rs`
//! 2. Implement `TransductionModel`
//! 3. Add tests
//! 4. Export in `mod.rs`

pub mod saturating;
pub mod traits;

pub use saturating::{SaturatingModel, TransductionParameters};
pub use traits::{ModelParameters, TransductionModel};
