// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for stock movements.

use blood_types::BloodType;

/// Errors that can occur when depositing or withdrawing stock.
///
/// Every variant is returned before any state is touched: a failed
/// deposit or withdrawal leaves both the ledger and the pool unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// Deposits and withdrawals must move at least one unit.
    #[error("units must be positive")]
    InvalidQuantity,

    /// No free storage block can hold the batch.
    #[error("storage capacity exhausted: no free block can hold {units} units of {blood_type}")]
    CapacityExhausted { blood_type: BloodType, units: u32 },

    /// The ledger holds less than requested.
    #[error("insufficient stock for {blood_type}: requested {requested} units, available {available}")]
    InsufficientStock {
        blood_type: BloodType,
        requested: u32,
        available: u32,
    },

    /// The ledger has the stock but no single block can release it.
    ///
    /// Happens when the quantity is spread over several batches that are
    /// each smaller than the request.
    #[error("allocator/ledger mismatch for {blood_type}: ledger holds {ledger_quantity} units but no single block can release {requested}")]
    AllocatorLedgerMismatch {
        blood_type: BloodType,
        requested: u32,
        ledger_quantity: u32,
    },

    /// The ledger disagrees with block occupancy.
    #[error("ledger records {ledger_quantity} units of {blood_type} but blocks hold {stored_units}")]
    ConservationViolated {
        blood_type: BloodType,
        ledger_quantity: u32,
        stored_units: u64,
    },
}
