// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cell classification: spectral channels and cell types

/// Spectral channel of a cone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConeChannel {
    Red,
    Green,
    Blue,
}

impl ConeChannel {
    /// Single-character code used by text displays
    pub fn symbol(self) -> char {
        match self {
            ConeChannel::Red => 'R',
            ConeChannel::Green => 'G',
            ConeChannel::Blue => 'B',
        }
    }
}

/// Photoreceptor classification (rod or cone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhotoreceptorType {
    Rod,
    Cone,
}

/// Classification of any cell in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    Rod,
    Cone,
    Bipolar,
    Ganglion,
}

impl CellType {
    /// Single-character code used by text displays
    pub fn symbol(self) -> char {
        match self {
            CellType::Rod => 'R',
            CellType::Cone => 'C',
            CellType::Bipolar => 'B',
            CellType::Ganglion => 'G',
        }
    }
}

impl From<PhotoreceptorType> for CellType {
    fn from(value: PhotoreceptorType) -> Self {
        match value {
            PhotoreceptorType::Rod => CellType::Rod,
            PhotoreceptorType::Cone => CellType::Cone,
        }
    }
}
