// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property-based tests for both policies.

use crate::policy::testing::{req, stocked};
use crate::{RequestId, RequestQueue, RoundRobin, SchedulingPolicy, StrictPriority};
use blood_types::BloodType;
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    /// Property: when each blood type's single batch covers its total
    /// demand, round-robin drains every request exactly and stalls nothing.
    #[test]
    fn prop_round_robin_drains_satisfiable_load(
        demands in prop::collection::vec((0..4usize, 1u32..=30), 1..8),
        quantum in 1u32..=15,
    ) {
        let mut totals = [0u32; BloodType::COUNT];
        let mut q = RequestQueue::new();
        for (i, &(t, units)) in demands.iter().enumerate() {
            totals[t] += units;
            q.submit(req(i as u32 + 1, BloodType::ALL[t], units, 5));
        }
        prop_assume!(totals.iter().all(|&u| u <= 100));

        let deposits: Vec<(BloodType, u32)> = totals
            .iter()
            .enumerate()
            .filter(|&(_, &u)| u > 0)
            .map(|(i, &u)| (BloodType::ALL[i], u))
            .collect();
        let mut inv = stocked(&deposits);

        let report = RoundRobin::new(quantum).unwrap().process(&mut q, &mut inv);

        prop_assert!(q.is_empty());
        prop_assert!(report.stalled.is_empty());
        for (i, &(_, units)) in demands.iter().enumerate() {
            prop_assert_eq!(report.units_served_for(RequestId(i as u32 + 1)), u64::from(units));
        }
        for p in &report.processed {
            prop_assert!(p.units <= quantum);
        }
        prop_assert!(inv.quantities().iter().all(|&q| q == 0));
    }

    /// Property: round-robin always terminates, and whatever it could not
    /// serve is still in the queue.
    #[test]
    fn prop_round_robin_terminates(
        demands in prop::collection::vec((0..3usize, 1u32..=60), 0..8),
        stock in prop::collection::vec((0..3usize, 1u32..=100), 0..4),
    ) {
        let deposits: Vec<(BloodType, u32)> =
            stock.iter().map(|&(t, u)| (BloodType::ALL[t], u)).collect();
        let mut inv = stocked(&deposits);
        let mut q = RequestQueue::new();
        for (i, &(t, units)) in demands.iter().enumerate() {
            q.submit(req(i as u32 + 1, BloodType::ALL[t], units, 5));
        }

        let report = RoundRobin::default().process(&mut q, &mut inv);
        prop_assert_eq!(report.stalled.len(), q.len());
        prop_assert!(inv.check_conservation().is_ok());
    }

    /// Property: higher priorities are attempted strictly before lower
    /// ones, and ties keep submission order.
    #[test]
    fn prop_priority_order(priorities in prop::collection::vec(1u8..=10, 1..12)) {
        let mut inv = stocked(&[(BloodType::APos, 100)]);
        let mut q = RequestQueue::new();
        for (i, &p) in priorities.iter().enumerate() {
            q.submit(req(i as u32 + 1, BloodType::APos, 1, p));
        }

        let report = StrictPriority::new().process(&mut q, &mut inv);
        prop_assert_eq!(report.processed.len(), priorities.len());

        let position: HashMap<u32, usize> = report
            .processed
            .iter()
            .enumerate()
            .map(|(pos, p)| (p.id.0, pos))
            .collect();
        for (i, &pi) in priorities.iter().enumerate() {
            for (j, &pj) in priorities.iter().enumerate() {
                let (a, b) = (position[&(i as u32 + 1)], position[&(j as u32 + 1)]);
                if pi > pj || (pi == pj && i < j) {
                    prop_assert!(a < b);
                }
            }
        }
    }
}
