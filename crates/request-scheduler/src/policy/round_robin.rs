// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Round-robin processing policy.
//!
//! Serves each request a bounded slice of units, then sends it to the back
//! of the queue with whatever is left. A request that cannot be served
//! goes to the back unchanged.
//!
//! # Cycle
//!
//! ```text
//! loop:
//!   req   = queue.pop_front()            (stop if empty)
//!   slice = min(req.units, quantum)
//!   withdraw(req.blood_type, slice)
//!     ok  → record (id, slice, type); push remainder if units > slice
//!     err → push req unchanged
//! ```
//!
//! # Stalls
//!
//! Stock only ever decreases during a cycle, so once every pending request
//! has been refused in a row, another rotation would be refused the same
//! way. The cycle stops at that point and reports the still-pending
//! requests as stalled; they stay in the queue.

use crate::policy::SchedulingPolicy;
use crate::{ProcessedRequest, ProcessingReport, RequestQueue, SchedulerError};
use inventory::{Inventory, InventoryError};

/// Units served per slice unless configured otherwise.
pub const DEFAULT_TIME_QUANTUM: u32 = 10;

/// Time-sliced processing with partial service.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    time_quantum: u32,
}

impl RoundRobin {
    /// Creates a policy that serves at most `time_quantum` units per slice.
    pub fn new(time_quantum: u32) -> Result<Self, SchedulerError> {
        if time_quantum == 0 {
            return Err(SchedulerError::InvalidTimeQuantum);
        }
        Ok(Self { time_quantum })
    }

    pub fn time_quantum(&self) -> u32 {
        self.time_quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &str {
        "round-robin"
    }

    fn process(&self, queue: &mut RequestQueue, inventory: &mut Inventory) -> ProcessingReport {
        let mut report = ProcessingReport::new(self.name());
        if queue.is_empty() {
            return report;
        }

        tracing::info!(
            "round-robin cycle over {} requests (quantum {})",
            queue.len(),
            self.time_quantum,
        );

        let mut consecutive_refusals = 0;
        while let Some(request) = queue.pop_front() {
            let slice = request.units.min(self.time_quantum);

            match inventory.withdraw(request.blood_type, slice) {
                Ok(()) => {
                    consecutive_refusals = 0;
                    tracing::debug!(
                        "request {}: served {slice}/{} units of {}",
                        request.id,
                        request.units,
                        request.blood_type,
                    );
                    report.processed.push(ProcessedRequest {
                        id: request.id,
                        units: slice,
                        blood_type: request.blood_type,
                    });
                    if request.units > slice {
                        queue.push_back(request.remainder(slice));
                    }
                }
                Err(e) => {
                    if matches!(e, InventoryError::AllocatorLedgerMismatch { .. }) {
                        tracing::error!("request {}: {e}", request.id);
                    } else {
                        tracing::debug!("request {} re-queued: {e}", request.id);
                    }
                    queue.push_back(request);
                    consecutive_refusals += 1;

                    if consecutive_refusals >= queue.len() {
                        report.stalled = queue.snapshot();
                        tracing::warn!(
                            "round-robin stalled: {} requests cannot be served from current stock",
                            report.stalled.len(),
                        );
                        break;
                    }
                }
            }
        }

        tracing::info!("{}", report.summary());
        report
    }
}
