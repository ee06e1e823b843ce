// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`SchedulingPolicy`] trait and policy implementations.

pub mod priority;
pub mod round_robin;

use crate::{ProcessingReport, RequestQueue, SchedulerError};
use inventory::Inventory;

/// Trait for request processing policies.
///
/// A policy drains (or reads) the queue and withdraws stock from the
/// inventory on behalf of each request. Refused withdrawals are part of
/// the normal flow and end up in the report, never as an error.
pub trait SchedulingPolicy: Send + Sync {
    /// Human-readable name of this policy.
    fn name(&self) -> &str;

    /// Runs one processing cycle.
    fn process(&self, queue: &mut RequestQueue, inventory: &mut Inventory) -> ProcessingReport;
}

/// Builds a policy from its configuration name.
///
/// `time_quantum` is only used by round-robin.
pub fn from_name(name: &str, time_quantum: u32) -> Result<Box<dyn SchedulingPolicy>, SchedulerError> {
    match name.to_lowercase().as_str() {
        "round-robin" | "rr" => Ok(Box::new(round_robin::RoundRobin::new(time_quantum)?)),
        "priority" => Ok(Box::new(priority::StrictPriority::new())),
        other => Err(SchedulerError::UnknownPolicy {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::{Request, RequestId};
    use block_allocator::{BlockAllocator, ManualClock, StorageLayout, Timestamp, DEFAULT_SHELF_LIFE_DAYS};
    use blood_types::BloodType;
    use inventory::Inventory;
    use std::sync::Arc;

    /// An inventory with a 1000/100 pool and the given single-batch deposits.
    pub fn stocked(deposits: &[(BloodType, u32)]) -> Inventory {
        let clock = ManualClock::new(Timestamp::from_millis(0));
        let mut inv = Inventory::new(BlockAllocator::new(
            StorageLayout::default(),
            Arc::new(clock),
            DEFAULT_SHELF_LIFE_DAYS,
        ));
        for &(t, units) in deposits {
            inv.deposit(t, units).unwrap();
        }
        inv
    }

    pub fn req(id: u32, blood_type: BloodType, units: u32, priority: u8) -> Request {
        Request::new(RequestId(id), blood_type, units, priority).unwrap()
    }
}
