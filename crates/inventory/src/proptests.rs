// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property-based tests for ledger conservation.

use crate::{Inventory, InventoryError};
use block_allocator::{BlockAllocator, ManualClock, StorageLayout, Timestamp, DEFAULT_SHELF_LIFE_DAYS};
use blood_types::BloodType;
use proptest::prelude::*;
use std::sync::Arc;

fn blood_type() -> impl Strategy<Value = BloodType> {
    // A narrow range so that withdrawals often hit existing stock.
    (0..3usize).prop_map(|i| BloodType::ALL[i])
}

fn inventory() -> Inventory {
    let clock = ManualClock::new(Timestamp::from_millis(0));
    Inventory::new(BlockAllocator::new(
        StorageLayout::default(),
        Arc::new(clock),
        DEFAULT_SHELF_LIFE_DAYS,
    ))
}

proptest! {
    /// Property: ledger quantity equals block occupancy after every
    /// operation, successful or not.
    #[test]
    fn prop_conservation(
        ops in prop::collection::vec((any::<bool>(), blood_type(), 0u32..=110), 1..80),
    ) {
        let mut inv = inventory();
        for (is_deposit, t, units) in ops {
            let _ = if is_deposit {
                inv.deposit(t, units)
            } else {
                inv.withdraw(t, units)
            };
            prop_assert!(inv.check_conservation().is_ok());
            for t in BloodType::ALL {
                let e = inv.entry(t);
                prop_assert_eq!(e.quantity == 0, e.expiry.is_none());
            }
        }
    }

    /// Property: a withdrawal never succeeds for more than the ledger held.
    #[test]
    fn prop_no_over_withdraw(
        deposits in prop::collection::vec((blood_type(), 1u32..=100), 0..8),
        t in blood_type(),
        units in 1u32..=300,
    ) {
        let mut inv = inventory();
        for (dt, du) in deposits {
            let _ = inv.deposit(dt, du);
        }

        let before = inv.quantity(t);
        let result = inv.withdraw(t, units);
        if before < units {
            let is_insufficient = matches!(result, Err(InventoryError::InsufficientStock { .. }));
            prop_assert!(is_insufficient);
            prop_assert_eq!(inv.quantity(t), before);
        } else if result.is_ok() {
            prop_assert_eq!(inv.quantity(t), before - units);
        } else {
            prop_assert_eq!(inv.quantity(t), before);
        }
    }
}
