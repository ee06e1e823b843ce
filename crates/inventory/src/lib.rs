// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # inventory
//!
//! The per-blood-type stock ledger. [`Inventory`] validates every deposit
//! and withdrawal, delegates physical placement to a
//! [`block_allocator::BlockAllocator`], and only updates its ledger once
//! the allocator has accepted the change.
//!
//! ```text
//! deposit(t, u)                       withdraw(t, u)
//!   │ u > 0?                            │ u > 0?  ledger[t] >= u?
//!   ▼                                   ▼
//! allocator.allocate(t, u)            allocator.release(t, u)
//!   │ ok → ledger[t] += u, expiry       │ ok → ledger[t] -= u
//!   │ no → CapacityExhausted            │ no → AllocatorLedgerMismatch
//! ```

mod error;
mod ledger;

#[cfg(test)]
mod proptests;

pub use error::InventoryError;
pub use ledger::{Inventory, InventorySnapshot, StockEntry, StockRow};
