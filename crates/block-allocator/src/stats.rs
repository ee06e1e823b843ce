// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Allocation statistics for diagnostics.
//!
//! [`AllocationStats`] tracks cumulative counters about how the storage
//! pool is being used: placements, refusals, releases, and the occupancy
//! high-water mark.

/// Cumulative statistics about storage pool usage.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct AllocationStats {
    /// Batches successfully placed into a block.
    pub total_allocations: u64,
    /// Placement requests refused because no free block was large enough.
    pub failed_allocations: u64,
    /// Successful releases (partial or full).
    pub total_releases: u64,
    /// Release requests refused because no single block held enough.
    pub failed_releases: u64,
    /// Highest total occupancy ever observed, in units.
    pub peak_used_units: u64,
    /// Units ever placed, including those since released.
    pub cumulative_allocated_units: u64,
}

impl AllocationStats {
    /// Fraction of placement requests that were refused, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` if nothing has been requested yet.
    pub fn refusal_ratio(&self) -> f64 {
        let total = self.total_allocations + self.failed_allocations;
        if total == 0 {
            return 0.0;
        }
        self.failed_allocations as f64 / total as f64
    }

    pub(crate) fn record_allocation(&mut self, units: u32) {
        self.total_allocations += 1;
        self.cumulative_allocated_units += u64::from(units);
    }

    pub(crate) fn record_failed_allocation(&mut self) {
        self.failed_allocations += 1;
    }

    pub(crate) fn record_release(&mut self) {
        self.total_releases += 1;
    }

    pub(crate) fn record_failed_release(&mut self) {
        self.failed_releases += 1;
    }

    pub(crate) fn update_peak(&mut self, used_units: u64) {
        if used_units > self.peak_used_units {
            self.peak_used_units = used_units;
        }
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Allocations: {} placed, {} refused ({:.0}% refused), \
             {} releases ({} refused), peak {} units, {} units cumulative",
            self.total_allocations,
            self.failed_allocations,
            self.refusal_ratio() * 100.0,
            self.total_releases,
            self.failed_releases,
            self.peak_used_units,
            self.cumulative_allocated_units,
        )
    }
}
