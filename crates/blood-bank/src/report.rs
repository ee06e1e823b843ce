// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Read-only views of the bank for presentation.

use block_allocator::AllocationStats;
use inventory::InventorySnapshot;
use request_scheduler::Request;
use safety_checker::SafetyError;

/// Outcome of a safety check in a presentable form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "verdict", rename_all = "kebab-case")]
pub enum SafetyVerdict {
    /// Request ids in one order that can complete.
    Safe { sequence: Vec<u32> },
    Unsafe { reason: String },
}

impl SafetyVerdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe { .. })
    }
}

impl From<&Result<Vec<u32>, SafetyError>> for SafetyVerdict {
    fn from(result: &Result<Vec<u32>, SafetyError>) -> Self {
        match result {
            Ok(sequence) => Self::Safe {
                sequence: sequence.clone(),
            },
            Err(e) => Self::Unsafe {
                reason: e.to_string(),
            },
        }
    }
}

/// Everything a status display needs, captured at one point in time.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BankStatus {
    /// Name of the configured processing policy.
    pub policy: String,
    pub time_quantum: u32,
    pub inventory: InventorySnapshot,
    /// Pending requests in FIFO order.
    pub pending: Vec<Request>,
    pub storage_stats: AllocationStats,
    /// Result of the latest safety check, if one has run.
    pub last_safety: Option<SafetyVerdict>,
    pub audit_entries: usize,
}

impl BankStatus {
    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        let safety = match &self.last_safety {
            Some(v) if v.is_safe() => "safe",
            Some(_) => "unsafe",
            None => "unchecked",
        };
        format!(
            "Bank: {} units in stock, storage {}/{} used, {} pending requests, policy {}, {}",
            self.inventory.total_units(),
            self.inventory.storage.used,
            self.inventory.storage.total,
            self.pending.len(),
            self.policy,
            safety,
        )
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
