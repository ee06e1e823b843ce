// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The stock ledger and its [`Inventory`] wrapper.
//!
//! The ledger is a fixed array of [`StockEntry`] indexed by
//! [`BloodType::index`]. Physical capacity is owned by the wrapped
//! [`BlockAllocator`]; the ledger only changes after the allocator has
//! accepted the matching placement or release, so
//! `quantity == sum(used_amount of blocks of that type)` after every call.

use crate::InventoryError;
use block_allocator::{AllocatorStatus, BlockAllocator, Timestamp};
use blood_types::BloodType;

/// Ledger row for one blood type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct StockEntry {
    /// Units on hand.
    pub quantity: u32,
    /// Expiry of the most recent deposit; `None` when the quantity is zero.
    pub expiry: Option<Timestamp>,
}

/// One ledger row tagged with its blood type, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StockRow {
    pub blood_type: BloodType,
    pub quantity: u32,
    pub expiry: Option<Timestamp>,
}

/// Read-only view of the ledger and pool occupancy.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InventorySnapshot {
    /// Rows in canonical blood type order.
    pub rows: Vec<StockRow>,
    pub storage: AllocatorStatus,
    /// Occupied blocks whose expiry has passed.
    pub expired_blocks: usize,
}

impl InventorySnapshot {
    /// Total units across all blood types.
    pub fn total_units(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.quantity)).sum()
    }
}

/// Per-blood-type stock ledger backed by a [`BlockAllocator`].
///
/// # Example
/// ```
/// use block_allocator::{BlockAllocator, StorageLayout};
/// use blood_types::BloodType;
/// use inventory::{Inventory, InventoryError};
///
/// let mut inv = Inventory::new(BlockAllocator::with_system_clock(StorageLayout::default()));
/// inv.deposit(BloodType::APos, 40).unwrap();
/// assert_eq!(inv.quantity(BloodType::APos), 40);
///
/// let err = inv.withdraw(BloodType::APos, 50).unwrap_err();
/// assert!(matches!(err, InventoryError::InsufficientStock { .. }));
/// ```
#[derive(Debug)]
pub struct Inventory {
    allocator: BlockAllocator,
    ledger: [StockEntry; BloodType::COUNT],
}

impl Inventory {
    /// Wraps an allocator with an empty ledger.
    ///
    /// The allocator is expected to be empty as well.
    pub fn new(allocator: BlockAllocator) -> Self {
        Self {
            allocator,
            ledger: [StockEntry::default(); BloodType::COUNT],
        }
    }

    /// Adds a batch of `units` to stock.
    ///
    /// On success the quantity grows by `units` and the expiry is reset to
    /// `now + shelf life`, regardless of older batches still on hand.
    pub fn deposit(&mut self, blood_type: BloodType, units: u32) -> Result<(), InventoryError> {
        if units == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        if !self.allocator.allocate(blood_type, units) {
            tracing::warn!("deposit refused: no free block for {units} units of {blood_type}");
            return Err(InventoryError::CapacityExhausted { blood_type, units });
        }

        let expiry = self
            .allocator
            .clock()
            .now()
            .plus_days(self.allocator.shelf_life_days());
        let entry = &mut self.ledger[blood_type.index()];
        entry.quantity += units;
        entry.expiry = Some(expiry);

        tracing::debug!("deposited {units} units of {blood_type} (now {})", entry.quantity);
        Ok(())
    }

    /// Removes `units` from stock.
    pub fn withdraw(&mut self, blood_type: BloodType, units: u32) -> Result<(), InventoryError> {
        if units == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        let available = self.ledger[blood_type.index()].quantity;
        if available < units {
            return Err(InventoryError::InsufficientStock {
                blood_type,
                requested: units,
                available,
            });
        }

        if !self.allocator.release(blood_type, units) {
            tracing::error!(
                "ledger holds {available} units of {blood_type} but no block can release {units}"
            );
            return Err(InventoryError::AllocatorLedgerMismatch {
                blood_type,
                requested: units,
                ledger_quantity: available,
            });
        }

        let entry = &mut self.ledger[blood_type.index()];
        entry.quantity -= units;
        if entry.quantity == 0 {
            entry.expiry = None;
        }

        tracing::debug!("withdrew {units} units of {blood_type} (now {})", entry.quantity);
        Ok(())
    }

    /// Units of `blood_type` on hand.
    pub fn quantity(&self, blood_type: BloodType) -> u32 {
        self.ledger[blood_type.index()].quantity
    }

    /// Ledger entry for `blood_type`.
    pub fn entry(&self, blood_type: BloodType) -> StockEntry {
        self.ledger[blood_type.index()]
    }

    /// Quantities in canonical blood type order.
    pub fn quantities(&self) -> [u32; BloodType::COUNT] {
        self.ledger.map(|e| e.quantity)
    }

    /// The wrapped allocator, read-only.
    pub fn allocator(&self) -> &BlockAllocator {
        &self.allocator
    }

    /// Returns a presentation snapshot of the ledger and pool.
    pub fn snapshot(&self) -> InventorySnapshot {
        let now = self.allocator.clock().now();
        InventorySnapshot {
            rows: BloodType::ALL
                .iter()
                .map(|&t| StockRow {
                    blood_type: t,
                    quantity: self.ledger[t.index()].quantity,
                    expiry: self.ledger[t.index()].expiry,
                })
                .collect(),
            storage: self.allocator.status(),
            expired_blocks: self.allocator.expired_blocks(now).len(),
        }
    }

    /// Verifies that every ledger quantity matches block occupancy.
    ///
    /// Returns the first mismatch in canonical order.
    pub fn check_conservation(&self) -> Result<(), InventoryError> {
        for t in BloodType::ALL {
            let ledger_quantity = self.ledger[t.index()].quantity;
            let stored_units = self.allocator.stored_units(t);
            if u64::from(ledger_quantity) != stored_units {
                return Err(InventoryError::ConservationViolated {
                    blood_type: t,
                    ledger_quantity,
                    stored_units,
                });
            }
        }
        Ok(())
    }
}
