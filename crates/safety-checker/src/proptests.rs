// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property-based tests for the safety search.

use crate::{find_safe_sequence, SafetySnapshot};
use proptest::prelude::*;

proptest! {
    /// Property: a returned sequence is a permutation of all process ids,
    /// and replaying it never lets a need exceed the work vector.
    #[test]
    fn prop_safe_sequence_replays(
        available in prop::collection::vec(0u64..20, 3),
        demands in prop::collection::vec(prop::collection::vec(0u64..10, 3), 0..6),
    ) {
        let mut snapshot = SafetySnapshot::new(available);
        for (i, max) in demands.iter().enumerate() {
            snapshot.add_process(i as u32, max.clone(), vec![0; 3]).unwrap();
        }

        if let Ok(sequence) = find_safe_sequence(&snapshot) {
            let mut sorted = sequence.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..demands.len() as u32).collect::<Vec<_>>());

            let mut work = snapshot.available().to_vec();
            for id in sequence {
                let p = &snapshot.processes()[id as usize];
                for (j, need) in p.need().into_iter().enumerate() {
                    prop_assert!(need <= work[j]);
                }
                for (free, held) in work.iter_mut().zip(&p.allocation) {
                    *free += held;
                }
            }
        }
    }

    /// Property: with nothing allocated, the state is safe exactly when
    /// every single demand fits in what is available.
    #[test]
    fn prop_zero_allocation_safety(
        available in prop::collection::vec(0u64..20, 2),
        demands in prop::collection::vec(prop::collection::vec(0u64..25, 2), 1..6),
    ) {
        let mut snapshot = SafetySnapshot::new(available.clone());
        for (i, max) in demands.iter().enumerate() {
            snapshot.add_process(i as u32, max.clone(), vec![0; 2]).unwrap();
        }
        let fits = demands
            .iter()
            .all(|d| d.iter().zip(&available).all(|(need, free)| need <= free));
        prop_assert_eq!(find_safe_sequence(&snapshot).is_ok(), fits);
    }
}
