// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for blood type parsing.

/// Errors produced when turning external input into a [`crate::BloodType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BloodTypeError {
    /// The text does not name one of the eight supported categories.
    #[error("invalid blood type '{input}': expected one of A+, A-, B+, B-, AB+, AB-, O+, O-")]
    InvalidCategory { input: String },

    /// A resource-vector index outside `0..BloodType::COUNT`.
    #[error("blood type index {index} out of range (0..{})", crate::BloodType::COUNT)]
    IndexOutOfRange { index: usize },
}
