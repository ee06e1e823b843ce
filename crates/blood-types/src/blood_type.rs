// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`BloodType`] enumeration.

use crate::BloodTypeError;
use std::fmt;
use std::str::FromStr;

/// One of the eight ABO/Rh blood groups.
///
/// Serialises to and from its clinical label (`"AB-"`, `"O+"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodType {
    /// Number of categories.
    pub const COUNT: usize = 8;

    /// All categories in canonical order.
    pub const ALL: [BloodType; Self::COUNT] = [
        BloodType::APos,
        BloodType::ANeg,
        BloodType::BPos,
        BloodType::BNeg,
        BloodType::AbPos,
        BloodType::AbNeg,
        BloodType::OPos,
        BloodType::ONeg,
    ];

    /// Position of this category in [`BloodType::ALL`].
    pub fn index(self) -> usize {
        match self {
            BloodType::APos => 0,
            BloodType::ANeg => 1,
            BloodType::BPos => 2,
            BloodType::BNeg => 3,
            BloodType::AbPos => 4,
            BloodType::AbNeg => 5,
            BloodType::OPos => 6,
            BloodType::ONeg => 7,
        }
    }

    /// Inverse of [`BloodType::index`].
    pub fn from_index(index: usize) -> Result<Self, BloodTypeError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(BloodTypeError::IndexOutOfRange { index })
    }

    /// Returns the clinical label.
    pub fn as_str(self) -> &'static str {
        match self {
            BloodType::APos => "A+",
            BloodType::ANeg => "A-",
            BloodType::BPos => "B+",
            BloodType::BNeg => "B-",
            BloodType::AbPos => "AB+",
            BloodType::AbNeg => "AB-",
            BloodType::OPos => "O+",
            BloodType::ONeg => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = BloodTypeError;

    /// Parses a label, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalised)
            .ok_or_else(|| BloodTypeError::InvalidCategory {
                input: s.to_string(),
            })
    }
}
