// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single fixed-size storage block.

use crate::Timestamp;
use blood_types::BloodType;

/// One physical storage unit in the pool.
///
/// A block is either free (no category, nothing stored, no timestamps) or
/// holds a single batch of one blood type. The fields are private so that
/// only the allocator can move a block between those two states.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StorageBlock {
    id: usize,
    capacity: u32,
    used_amount: u32,
    category: Option<BloodType>,
    intake_time: Option<Timestamp>,
    expiry_time: Option<Timestamp>,
}

impl StorageBlock {
    pub(crate) fn new(id: usize, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            used_amount: 0,
            category: None,
            intake_time: None,
            expiry_time: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn used_amount(&self) -> u32 {
        self.used_amount
    }

    /// Blood type stored here, `None` when the block is free.
    pub fn category(&self) -> Option<BloodType> {
        self.category
    }

    pub fn intake_time(&self) -> Option<Timestamp> {
        self.intake_time
    }

    pub fn expiry_time(&self) -> Option<Timestamp> {
        self.expiry_time
    }

    /// Returns `true` if no blood type is assigned.
    pub fn is_free(&self) -> bool {
        self.category.is_none()
    }

    /// Unused units left in this block.
    pub fn headroom(&self) -> u32 {
        self.capacity - self.used_amount
    }

    /// Returns `true` if the block holds stock whose expiry is at or before `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expiry_time.is_some_and(|expiry| expiry <= now)
    }

    /// Places a batch into a free block.
    pub(crate) fn assign(&mut self, category: BloodType, units: u32, intake: Timestamp, expiry: Timestamp) {
        debug_assert!(self.is_free());
        debug_assert!(units > 0 && units <= self.capacity);
        self.category = Some(category);
        self.used_amount = units;
        self.intake_time = Some(intake);
        self.expiry_time = Some(expiry);
    }

    /// Removes `units` from an occupied block, freeing it when it empties.
    pub(crate) fn drain(&mut self, units: u32) {
        debug_assert!(units <= self.used_amount);
        self.used_amount -= units;
        if self.used_amount == 0 {
            self.category = None;
            self.intake_time = None;
            self.expiry_time = None;
        }
    }
}
