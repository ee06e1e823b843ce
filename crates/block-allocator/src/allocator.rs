// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Best-fit block allocator over a static pool.
//!
//! The [`BlockAllocator`] owns a fixed vector of [`StorageBlock`]s created
//! from a [`StorageLayout`]. It:
//!
//! 1. Places each batch into exactly one free block, choosing the block
//!    that leaves the least unused capacity (best fit, lowest index on ties).
//! 2. Releases units from the first block of the requested type that holds
//!    enough on its own. Batches are never split or merged across blocks.
//! 3. Tracks allocation statistics for diagnostics.
//!
//! Refusals are reported as `false` with no mutation; the caller decides
//! what that means (the ledger maps it to capacity or consistency errors).

use crate::{AllocationStats, Clock, StorageBlock, StorageLayout, SystemClock, Timestamp};
use blood_types::BloodType;
use std::sync::Arc;

/// Default shelf life applied to every intake.
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 30;

/// Occupancy summary of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AllocatorStatus {
    /// Configured total capacity in units.
    pub total: u64,
    /// Units currently stored.
    pub used: u64,
    /// `total - used`.
    pub available: u64,
}

/// Fixed pool of fixed-size storage blocks.
///
/// # Example
/// ```
/// use block_allocator::{BlockAllocator, StorageLayout};
/// use blood_types::BloodType;
///
/// let mut alloc = BlockAllocator::with_system_clock(StorageLayout::default());
/// assert!(alloc.allocate(BloodType::OPos, 50));
/// assert_eq!(alloc.status().used, 50);
///
/// assert!(alloc.release(BloodType::OPos, 50));
/// assert_eq!(alloc.status().used, 0);
/// ```
pub struct BlockAllocator {
    layout: StorageLayout,
    blocks: Vec<StorageBlock>,
    clock: Arc<dyn Clock>,
    shelf_life_days: u32,
    stats: AllocationStats,
}

impl BlockAllocator {
    /// Creates a pool of `layout.block_count()` empty blocks.
    pub fn new(layout: StorageLayout, clock: Arc<dyn Clock>, shelf_life_days: u32) -> Self {
        let blocks = (0..layout.block_count())
            .map(|id| StorageBlock::new(id, layout.block_size()))
            .collect();

        tracing::debug!("storage pool created: {layout}");

        Self {
            layout,
            blocks,
            clock,
            shelf_life_days,
            stats: AllocationStats::default(),
        }
    }

    /// Creates a pool stamped by the wall clock with the default shelf life.
    pub fn with_system_clock(layout: StorageLayout) -> Self {
        Self::new(layout, Arc::new(SystemClock), DEFAULT_SHELF_LIFE_DAYS)
    }

    /// Places `units` of `category` into a single free block.
    ///
    /// Returns `false`, leaving the pool untouched, if no free block can
    /// hold the whole batch or `units` is zero.
    pub fn allocate(&mut self, category: BloodType, units: u32) -> bool {
        self.allocate_block(category, units).is_some()
    }

    /// Like [`allocate`](Self::allocate), but reports which block was used.
    pub fn allocate_block(&mut self, category: BloodType, units: u32) -> Option<usize> {
        let Some(index) = self.best_fit(units) else {
            self.stats.record_failed_allocation();
            tracing::debug!("no free block fits {units} units of {category}");
            return None;
        };

        let now = self.clock.now();
        let expiry = now.plus_days(self.shelf_life_days);
        self.blocks[index].assign(category, units, now, expiry);

        self.stats.record_allocation(units);
        self.stats.update_peak(self.used_units());
        tracing::debug!(
            block = index,
            waste = self.blocks[index].headroom(),
            "allocated {units} units of {category}"
        );
        Some(index)
    }

    /// Removes `units` of `category` from the first block that holds enough.
    ///
    /// Returns `false`, leaving the pool untouched, if no single block of
    /// that type holds `units` or `units` is zero.
    pub fn release(&mut self, category: BloodType, units: u32) -> bool {
        self.release_block(category, units).is_some()
    }

    /// Like [`release`](Self::release), but reports which block was drained.
    pub fn release_block(&mut self, category: BloodType, units: u32) -> Option<usize> {
        let found = if units == 0 {
            None
        } else {
            self.blocks
                .iter()
                .position(|b| b.category() == Some(category) && b.used_amount() >= units)
        };

        let Some(index) = found else {
            self.stats.record_failed_release();
            tracing::debug!("no single block holds {units} units of {category}");
            return None;
        };

        self.blocks[index].drain(units);
        self.stats.record_release();
        tracing::debug!(
            block = index,
            freed = self.blocks[index].is_free(),
            "released {units} units of {category}"
        );
        Some(index)
    }

    /// Returns total, used and available capacity.
    pub fn status(&self) -> AllocatorStatus {
        let total = u64::from(self.layout.total_capacity());
        let used = self.used_units();
        AllocatorStatus {
            total,
            used,
            available: total.saturating_sub(used),
        }
    }

    /// Read-only view of every block in index order.
    pub fn blocks(&self) -> &[StorageBlock] {
        &self.blocks
    }

    /// Units of `category` stored across all blocks.
    pub fn stored_units(&self, category: BloodType) -> u64 {
        self.blocks
            .iter()
            .filter(|b| b.category() == Some(category))
            .map(|b| u64::from(b.used_amount()))
            .sum()
    }

    /// Occupied blocks whose expiry is at or before `now`.
    ///
    /// Purely diagnostic: expired stock is reported, never discarded.
    pub fn expired_blocks(&self, now: Timestamp) -> Vec<&StorageBlock> {
        self.blocks.iter().filter(|b| b.is_expired(now)).collect()
    }

    pub fn layout(&self) -> StorageLayout {
        self.layout
    }

    pub fn shelf_life_days(&self) -> u32 {
        self.shelf_life_days
    }

    /// The clock this pool stamps intake and expiry with.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Returns a snapshot of allocation statistics.
    pub fn stats(&self) -> AllocationStats {
        self.stats.clone()
    }

    fn used_units(&self) -> u64 {
        self.blocks.iter().map(|b| u64::from(b.used_amount())).sum()
    }

    /// Index of the free block with the smallest non-negative waste.
    ///
    /// `min_by_key` keeps the first minimum, so ties go to the lowest index.
    fn best_fit(&self, units: u32) -> Option<usize> {
        if units == 0 {
            return None;
        }
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_free() && b.capacity() >= units)
            .min_by_key(|(_, b)| b.capacity() - units)
            .map(|(i, _)| i)
    }
}

impl std::fmt::Debug for BlockAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.status();
        f.debug_struct("BlockAllocator")
            .field("layout", &self.layout)
            .field("used", &status.used)
            .field("available", &status.available)
            .finish()
    }
}
