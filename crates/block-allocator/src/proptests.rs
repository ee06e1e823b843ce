// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property-based tests for block placement and release.

use crate::{BlockAllocator, ManualClock, StorageLayout, Timestamp, DEFAULT_SHELF_LIFE_DAYS};
use blood_types::BloodType;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Op {
    Allocate(BloodType, u32),
    Release(BloodType, u32),
}

fn blood_type() -> impl Strategy<Value = BloodType> {
    (0..BloodType::COUNT).prop_map(|i| BloodType::ALL[i])
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (blood_type(), 0u32..=120).prop_map(|(t, u)| Op::Allocate(t, u)),
        (blood_type(), 0u32..=120).prop_map(|(t, u)| Op::Release(t, u)),
    ]
}

fn allocator(total: u32, block: u32) -> BlockAllocator {
    let clock = ManualClock::new(Timestamp::from_millis(0));
    BlockAllocator::new(
        StorageLayout::new(total, block).unwrap(),
        Arc::new(clock),
        DEFAULT_SHELF_LIFE_DAYS,
    )
}

proptest! {
    /// Property: every placement lands in the free block with the least
    /// waste, and the lowest such index on ties.
    #[test]
    fn prop_best_fit_choice(
        ops in prop::collection::vec(op(), 1..60),
        block in prop::sample::select(vec![10u32, 50, 100]),
    ) {
        let mut alloc = allocator(block * 8, block);

        for op in ops {
            match op {
                Op::Allocate(t, units) => {
                    let expected = alloc
                        .blocks()
                        .iter()
                        .filter(|b| b.is_free() && units > 0 && b.capacity() >= units)
                        .min_by_key(|b| (b.capacity() - units, b.id()))
                        .map(|b| b.id());
                    prop_assert_eq!(alloc.allocate_block(t, units), expected);
                }
                Op::Release(t, units) => {
                    alloc.release(t, units);
                }
            }
        }
    }

    /// Property: block invariants hold after any sequence of operations,
    /// and refused operations leave the pool untouched.
    #[test]
    fn prop_block_invariants(ops in prop::collection::vec(op(), 1..80)) {
        let mut alloc = allocator(1000, 100);

        for op in ops {
            let before: Vec<_> = alloc.blocks().to_vec();
            let ok = match op {
                Op::Allocate(t, units) => alloc.allocate(t, units),
                Op::Release(t, units) => alloc.release(t, units),
            };
            if !ok {
                prop_assert_eq!(alloc.blocks(), before.as_slice());
            }

            for b in alloc.blocks() {
                prop_assert!(b.used_amount() <= b.capacity());
                prop_assert_eq!(b.category().is_none(), b.used_amount() == 0);
                prop_assert_eq!(b.category().is_none(), b.expiry_time().is_none());
            }
            let status = alloc.status();
            prop_assert_eq!(status.used + status.available, status.total);
        }
    }
}
