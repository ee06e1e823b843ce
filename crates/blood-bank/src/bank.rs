// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`BloodBank`] facade.
//!
//! ```text
//!  deposit / withdraw ──────────────► Inventory ──► BlockAllocator
//!  submit ──► RequestQueue                ▲
//!  process_* ──► SchedulingPolicy ────────┘
//!  safety_check ──► SafetySnapshot(inventory, queue) ──► SafetyChecker
//! ```
//!
//! Every mutating call is recorded in the audit log with the time from
//! the injected [`Clock`].

use crate::audit::{AuditEvent, AuditLog};
use crate::{BankConfig, BankError, BankStatus, SafetyVerdict};
use block_allocator::{BlockAllocator, Clock, SystemClock};
use blood_types::BloodType;
use inventory::{Inventory, InventorySnapshot};
use request_scheduler::{
    ProcessingReport, Request, RequestId, RequestQueue, RoundRobin, SchedulingPolicy, StrictPriority,
};
use safety_checker::{SafetyChecker, SafetyError, SafetySnapshot};
use std::sync::Arc;

/// Inventory, request queue and safety checker behind one API.
///
/// # Example
/// ```
/// use blood_bank::{BankConfig, BloodBank};
/// use blood_types::BloodType;
///
/// let mut bank = BloodBank::with_system_clock(BankConfig::default()).unwrap();
/// bank.deposit(BloodType::OPos, 50).unwrap();
/// bank.submit(BloodType::OPos, 30, 5).unwrap();
///
/// let report = bank.process_round_robin();
/// assert_eq!(report.units_served(), 30);
/// assert_eq!(bank.inventory().quantity(BloodType::OPos), 20);
/// ```
pub struct BloodBank {
    config: BankConfig,
    clock: Arc<dyn Clock>,
    inventory: Inventory,
    queue: RequestQueue,
    policy: Box<dyn SchedulingPolicy>,
    round_robin: RoundRobin,
    priority: StrictPriority,
    checker: SafetyChecker,
    audit: AuditLog,
}

impl BloodBank {
    /// Creates an empty bank from `config`, reading time from `clock`.
    pub fn new(config: BankConfig, clock: Arc<dyn Clock>) -> Result<Self, BankError> {
        let layout = config.layout()?;
        let policy = config.create_policy()?;
        let round_robin = RoundRobin::new(config.time_quantum)?;
        tracing::info!(
            "blood bank created: {layout}, shelf life {} days, policy '{}'",
            config.shelf_life_days,
            policy.name(),
        );

        let allocator = BlockAllocator::new(layout, Arc::clone(&clock), config.shelf_life_days);
        Ok(Self {
            config,
            clock,
            inventory: Inventory::new(allocator),
            queue: RequestQueue::new(),
            policy,
            round_robin,
            priority: StrictPriority::new(),
            checker: SafetyChecker::new(),
            audit: AuditLog::new(),
        })
    }

    /// Creates an empty bank that reads wall-clock time.
    pub fn with_system_clock(config: BankConfig) -> Result<Self, BankError> {
        Self::new(config, Arc::new(SystemClock))
    }

    // ── Stock ──────────────────────────────────────────────────

    /// Stores a batch of donated units.
    pub fn deposit(&mut self, blood_type: BloodType, units: u32) -> Result<(), BankError> {
        match self.inventory.deposit(blood_type, units) {
            Ok(()) => {
                self.record(AuditEvent::Deposit { blood_type, units });
                Ok(())
            }
            Err(e) => {
                self.refused("deposit", &e);
                Err(e.into())
            }
        }
    }

    /// Takes units out of stock directly, outside the request queue.
    pub fn withdraw(&mut self, blood_type: BloodType, units: u32) -> Result<(), BankError> {
        match self.inventory.withdraw(blood_type, units) {
            Ok(()) => {
                self.record(AuditEvent::Withdrawal { blood_type, units });
                Ok(())
            }
            Err(e) => {
                self.refused("withdraw", &e);
                Err(e.into())
            }
        }
    }

    // ── Requests ───────────────────────────────────────────────

    /// Queues a request and returns its id (queue length + 1).
    pub fn submit(&mut self, blood_type: BloodType, units: u32, priority: u8) -> Result<RequestId, BankError> {
        let id = self.queue.next_id();
        let request = match Request::new(id, blood_type, units, priority) {
            Ok(r) => r,
            Err(e) => {
                self.refused("submit", &e);
                return Err(e.into());
            }
        };
        self.queue.submit(request);
        self.record(AuditEvent::Submission {
            id,
            blood_type,
            units,
            priority,
        });
        Ok(id)
    }

    /// Drops a pending request.
    pub fn cancel(&mut self, id: RequestId) -> Option<Request> {
        let removed = self.queue.remove(id)?;
        self.record(AuditEvent::Cancellation { id });
        Some(removed)
    }

    /// Runs the configured policy.
    pub fn process(&mut self) -> ProcessingReport {
        let report = self.policy.process(&mut self.queue, &mut self.inventory);
        self.record(AuditEvent::processing(&report));
        report
    }

    /// Runs one round-robin cycle with the configured time quantum.
    pub fn process_round_robin(&mut self) -> ProcessingReport {
        let report = self.round_robin.process(&mut self.queue, &mut self.inventory);
        self.record(AuditEvent::processing(&report));
        report
    }

    /// Runs one strict-priority pass. The queue is left as it was.
    pub fn process_priority(&mut self) -> ProcessingReport {
        let report = self.priority.process(&mut self.queue, &mut self.inventory);
        self.record(AuditEvent::processing(&report));
        report
    }

    // ── Safety ─────────────────────────────────────────────────

    /// Builds the safety snapshot for the current stock and queue.
    ///
    /// Each pending request is a process whose maximum demand is its units
    /// in its own blood type's slot; nothing is allocated yet.
    pub fn safety_snapshot(&self) -> Result<SafetySnapshot, SafetyError> {
        let available = self.inventory.quantities().iter().map(|&q| u64::from(q)).collect();
        let mut snapshot = SafetySnapshot::new(available);
        for request in self.queue.iter() {
            let mut max_demand = vec![0; BloodType::COUNT];
            max_demand[request.blood_type.index()] = u64::from(request.units);
            snapshot.add_process(request.id.0, max_demand, vec![0; BloodType::COUNT])?;
        }
        Ok(snapshot)
    }

    /// Checks whether every pending request can be served in some order.
    ///
    /// Returns that order, or [`SafetyError::UnsafeState`].
    pub fn safety_check(&mut self) -> Result<Vec<RequestId>, BankError> {
        let snapshot = self.safety_snapshot()?;
        let result = self.checker.check(&snapshot);
        self.record(AuditEvent::SafetyCheck {
            processes: snapshot.len(),
            safe: result.is_ok(),
        });
        Ok(result?.into_iter().map(RequestId).collect())
    }

    /// Result of the latest [`safety_check`](Self::safety_check).
    pub fn last_safety_result(&self) -> Option<&Result<Vec<u32>, SafetyError>> {
        self.checker.last_result()
    }

    // ── Views ──────────────────────────────────────────────────

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    pub fn inventory_snapshot(&self) -> InventorySnapshot {
        self.inventory.snapshot()
    }

    /// Pending requests in FIFO order.
    pub fn queue_snapshot(&self) -> Vec<Request> {
        self.queue.snapshot()
    }

    pub fn status(&self) -> BankStatus {
        BankStatus {
            policy: self.policy.name().to_string(),
            time_quantum: self.round_robin.time_quantum(),
            inventory: self.inventory.snapshot(),
            pending: self.queue.snapshot(),
            storage_stats: self.inventory.allocator().stats(),
            last_safety: self.checker.last_result().map(SafetyVerdict::from),
            audit_entries: self.audit.len(),
        }
    }

    // ── Private helpers ────────────────────────────────────────

    fn record(&mut self, event: AuditEvent) {
        self.audit.record(self.clock.now(), event);
    }

    fn refused(&mut self, operation: &str, reason: &dyn std::fmt::Display) {
        tracing::warn!("{operation} refused: {reason}");
        self.record(AuditEvent::Refused {
            operation: operation.to_string(),
            reason: reason.to_string(),
        });
    }
}

impl std::fmt::Debug for BloodBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloodBank")
            .field("policy", &self.policy.name())
            .field("pending", &self.queue.len())
            .field("stored_units", &self.inventory.snapshot().total_units())
            .field("audit_entries", &self.audit.len())
            .finish()
    }
}
