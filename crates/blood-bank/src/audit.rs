// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Timestamped record of everything the bank did.

use block_allocator::Timestamp;
use blood_types::BloodType;
use request_scheduler::{ProcessingReport, RequestId};
use std::fmt;

/// One thing that happened.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum AuditEvent {
    Deposit {
        blood_type: BloodType,
        units: u32,
    },
    Withdrawal {
        blood_type: BloodType,
        units: u32,
    },
    Submission {
        id: RequestId,
        blood_type: BloodType,
        units: u32,
        priority: u8,
    },
    Cancellation {
        id: RequestId,
    },
    Processing {
        policy: String,
        withdrawals: usize,
        units: u64,
        skipped: usize,
        stalled: usize,
    },
    SafetyCheck {
        processes: usize,
        safe: bool,
    },
    /// A direct operation was refused; state is unchanged.
    Refused {
        operation: String,
        reason: String,
    },
}

impl AuditEvent {
    pub(crate) fn processing(report: &ProcessingReport) -> Self {
        Self::Processing {
            policy: report.policy.clone(),
            withdrawals: report.processed.len(),
            units: report.units_served(),
            skipped: report.skipped.len(),
            stalled: report.stalled.len(),
        }
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit { blood_type, units } => write!(f, "deposit {units} units of {blood_type}"),
            Self::Withdrawal { blood_type, units } => write!(f, "withdraw {units} units of {blood_type}"),
            Self::Submission {
                id,
                blood_type,
                units,
                priority,
            } => write!(f, "request {id}: {units} units of {blood_type}, priority {priority}"),
            Self::Cancellation { id } => write!(f, "request {id} cancelled"),
            Self::Processing {
                policy,
                withdrawals,
                units,
                skipped,
                stalled,
            } => write!(
                f,
                "{policy} run: {withdrawals} withdrawals ({units} units), {skipped} skipped, {stalled} stalled"
            ),
            Self::SafetyCheck { processes, safe } => {
                let verdict = if *safe { "safe" } else { "unsafe" };
                write!(f, "safety check over {processes} requests: {verdict}")
            }
            Self::Refused { operation, reason } => write!(f, "{operation} refused: {reason}"),
        }
    }
}

/// An event with the time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AuditEntry {
    pub at: Timestamp,
    #[serde(flatten)]
    pub event: AuditEvent,
}

/// Append-only event log.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(transparent)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, at: Timestamp, event: AuditEvent) {
        tracing::trace!("audit: {event}");
        self.entries.push(AuditEntry { at, event });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The last `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[AuditEntry] {
        &self.entries[self.entries.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
