// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Base cell: potential, range and receptive-field references

use super::photoreceptor::Photoreceptor;
use crate::types::{CellId, CellType, PotentialRange};

/// Closed set of cell variants
#[derive(Debug, Clone, PartialEq)]
pub enum CellKind {
    Photoreceptor(Photoreceptor),
    Bipolar,
    /// Placeholder: constructible, default update only
    Ganglion,
}

/// A cell owned by a [`CellArena`](crate::CellArena).
///
/// `center_inputs` and `surround_inputs` are non-owning handles into the same
/// arena. They are fixed when the cell is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    kind: CellKind,
    range: PotentialRange,
    potential: f64,
    is_graded: bool,
    center_inputs: Vec<CellId>,
    surround_inputs: Vec<CellId>,
}

impl Cell {
    fn with_kind(kind: CellKind, range: PotentialRange, is_graded: bool) -> Self {
        Self {
            kind,
            range,
            potential: range.resting,
            is_graded,
            center_inputs: Vec::new(),
            surround_inputs: Vec::new(),
        }
    }

    pub fn photoreceptor(photoreceptor: Photoreceptor, range: PotentialRange) -> Self {
        Self::with_kind(CellKind::Photoreceptor(photoreceptor), range, true)
    }

    pub fn bipolar(range: PotentialRange) -> Self {
        Self::with_kind(CellKind::Bipolar, range, true)
    }

    pub fn ganglion(range: PotentialRange) -> Self {
        Self::with_kind(CellKind::Ganglion, range, false)
    }

    /// Attach center and surround references (builder style, before insertion)
    pub fn with_inputs(mut self, center: Vec<CellId>, surround: Vec<CellId>) -> Self {
        self.center_inputs = center;
        self.surround_inputs = surround;
        self
    }

    /// Current potential; equals `range.resting` until the first update
    pub fn potential(&self) -> f64 {
        self.potential
    }

    pub(crate) fn set_potential(&mut self, potential: f64) {
        self.potential = potential;
    }

    pub fn range(&self) -> &PotentialRange {
        &self.range
    }

    pub fn is_graded(&self) -> bool {
        self.is_graded
    }

    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    pub fn cell_type(&self) -> CellType {
        match &self.kind {
            CellKind::Photoreceptor(p) => p.photoreceptor_type().into(),
            CellKind::Bipolar => CellType::Bipolar,
            CellKind::Ganglion => CellType::Ganglion,
        }
    }

    pub fn as_photoreceptor(&self) -> Option<&Photoreceptor> {
        match &self.kind {
            CellKind::Photoreceptor(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_photoreceptor_mut(&mut self) -> Option<&mut Photoreceptor> {
        match &mut self.kind {
            CellKind::Photoreceptor(p) => Some(p),
            _ => None,
        }
    }

    pub fn center_inputs(&self) -> &[CellId] {
        &self.center_inputs
    }

    pub fn surround_inputs(&self) -> &[CellId] {
        &self.surround_inputs
    }

    pub(crate) fn inputs(&self) -> impl Iterator<Item = CellId> + '_ {
        self.center_inputs
            .iter()
            .chain(self.surround_inputs.iter())
            .copied()
    }
}
