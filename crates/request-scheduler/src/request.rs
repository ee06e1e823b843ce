// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pending blood requests.

use crate::SchedulerError;
use blood_types::BloodType;
use std::fmt;

/// Caller-assigned request identifier.
///
/// The queue never generates ids itself; see [`crate::RequestQueue::next_id`]
/// for the conventional numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Urgency of a request, from 1 (lowest) to 10 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, SchedulerError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SchedulerError::InvalidPriority {
                priority: value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pending demand for `units` of one blood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Request {
    pub id: RequestId,
    pub blood_type: BloodType,
    pub units: u32,
    pub priority: Priority,
}

impl Request {
    /// Builds a request, rejecting zero units and out-of-range priorities.
    pub fn new(id: RequestId, blood_type: BloodType, units: u32, priority: u8) -> Result<Self, SchedulerError> {
        if units == 0 {
            return Err(SchedulerError::InvalidQuantity);
        }
        Ok(Self {
            id,
            blood_type,
            units,
            priority: Priority::new(priority)?,
        })
    }

    /// The same request with `served` units taken off.
    pub(crate) fn remainder(self, served: u32) -> Self {
        Self {
            units: self.units - served,
            ..self
        }
    }
}
