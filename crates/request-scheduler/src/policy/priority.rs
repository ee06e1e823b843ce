// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Strict priority processing policy.
//!
//! Attempts every pending request once, highest priority first, each for
//! its full amount. A refused request is skipped for this run; there is no
//! partial service and nothing is re-queued.
//!
//! The policy works on a sorted copy of the queue and never modifies the
//! queue itself. Removing served requests is left to the caller, which can
//! use the ids in [`ProcessingReport::processed`].

use crate::policy::SchedulingPolicy;
use crate::{ProcessedRequest, ProcessingReport, RequestQueue};
use inventory::Inventory;

/// Highest priority first, all-or-nothing per request.
#[derive(Debug, Clone, Default)]
pub struct StrictPriority;

impl StrictPriority {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulingPolicy for StrictPriority {
    fn name(&self) -> &str {
        "priority"
    }

    fn process(&self, queue: &mut RequestQueue, inventory: &mut Inventory) -> ProcessingReport {
        let mut report = ProcessingReport::new(self.name());
        if queue.is_empty() {
            return report;
        }

        let ordered = queue.by_priority();
        tracing::info!(
            "priority run over {} requests, order {:?}",
            ordered.len(),
            ordered.iter().map(|r| r.id.0).collect::<Vec<_>>(),
        );

        for request in ordered {
            match inventory.withdraw(request.blood_type, request.units) {
                Ok(()) => {
                    tracing::debug!(
                        "request {}: served {} units of {} (priority {})",
                        request.id,
                        request.units,
                        request.blood_type,
                        request.priority,
                    );
                    report.processed.push(ProcessedRequest {
                        id: request.id,
                        units: request.units,
                        blood_type: request.blood_type,
                    });
                }
                Err(e) => {
                    tracing::warn!("request {} skipped: {e}", request.id);
                    report.skipped.push(request.id);
                }
            }
        }

        tracing::info!("{}", report.summary());
        report
    }
}
