// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Results of a processing run.
//!
//! A [`ProcessingReport`] is the contract between a policy and whoever
//! presents or acts on its outcome.

use crate::{Request, RequestId};
use blood_types::BloodType;

/// One successful withdrawal made on behalf of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ProcessedRequest {
    pub id: RequestId,
    /// Units withdrawn in this step (a slice under round-robin).
    pub units: u32,
    pub blood_type: BloodType,
}

/// Everything a single policy run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ProcessingReport {
    /// Name of the policy that produced this report.
    pub policy: String,
    /// Successful withdrawals, in the order they happened.
    pub processed: Vec<ProcessedRequest>,
    /// Requests attempted once and refused (priority policy).
    pub skipped: Vec<RequestId>,
    /// Requests left pending because a full rotation made no progress
    /// (round-robin policy). They remain in the queue.
    pub stalled: Vec<Request>,
}

impl ProcessingReport {
    pub(crate) fn new(policy: &str) -> Self {
        Self {
            policy: policy.to_string(),
            ..Self::default()
        }
    }

    /// Returns `true` if nothing was withdrawn.
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }

    /// Total units withdrawn.
    pub fn units_served(&self) -> u64 {
        self.processed.iter().map(|p| u64::from(p.units)).sum()
    }

    /// Units withdrawn on behalf of `id`.
    pub fn units_served_for(&self, id: RequestId) -> u64 {
        self.processed
            .iter()
            .filter(|p| p.id == id)
            .map(|p| u64::from(p.units))
            .sum()
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} withdrawals ({} units), {} skipped, {} stalled",
            self.policy,
            self.processed.len(),
            self.units_served(),
            self.skipped.len(),
            self.stalled.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let r = ProcessingReport::new("round-robin");
        assert!(r.is_empty());
        assert_eq!(r.units_served(), 0);
        assert_eq!(r.summary(), "round-robin: 0 withdrawals (0 units), 0 skipped, 0 stalled");
    }

    #[test]
    fn test_units_served() {
        let mut r = ProcessingReport::new("round-robin");
        for (id, units) in [(1, 10), (2, 4), (1, 3)] {
            r.processed.push(ProcessedRequest {
                id: RequestId(id),
                units,
                blood_type: BloodType::APos,
            });
        }
        assert_eq!(r.units_served(), 17);
        assert_eq!(r.units_served_for(RequestId(1)), 13);
        assert!(r.summary().contains("3 withdrawals (17 units)"));
    }

    #[test]
    fn test_report_json() {
        let mut r = ProcessingReport::new("priority");
        r.processed.push(ProcessedRequest {
            id: RequestId(4),
            units: 6,
            blood_type: BloodType::ONeg,
        });
        r.skipped.push(RequestId(5));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["policy"], "priority");
        assert_eq!(json["processed"][0]["id"], 4);
        assert_eq!(json["processed"][0]["units"], 6);
        assert_eq!(json["skipped"], serde_json::json!([5]));
    }
}
