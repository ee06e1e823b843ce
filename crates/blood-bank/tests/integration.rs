// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: the full engine through the facade.
//!
//! These tests drive deposits, requests, both policies and the safety
//! check through `BloodBank`, proving the five library crates compose
//! and that the ledger stays consistent with block occupancy throughout.

use block_allocator::{ManualClock, Timestamp};
use blood_bank::{BankConfig, BankError, BloodBank, Scenario, StepResult};
use blood_types::BloodType;
use inventory::InventoryError;
use request_scheduler::RequestId;
use safety_checker::SafetyError;
use std::sync::Arc;

// ── Helpers ────────────────────────────────────────────────────

fn bank_with(config: BankConfig) -> (BloodBank, ManualClock) {
    let clock = ManualClock::new(Timestamp::from_millis(0));
    let bank = BloodBank::new(config, Arc::new(clock.clone())).unwrap();
    (bank, clock)
}

fn bank() -> BloodBank {
    bank_with(BankConfig::default()).0
}

fn assert_consistent(bank: &BloodBank) {
    bank.inventory().check_conservation().unwrap();
}

// ── Stock ──────────────────────────────────────────────────────

#[test]
fn test_o_positive_walkthrough() {
    let mut bank = bank();
    bank.deposit(BloodType::OPos, 50).unwrap();
    bank.submit(BloodType::OPos, 30, 5).unwrap();

    let report = bank.process_round_robin();
    let slices: Vec<(u32, u32)> = report.processed.iter().map(|p| (p.id.0, p.units)).collect();
    assert_eq!(slices, vec![(1, 10), (1, 10), (1, 10)]);

    assert_eq!(bank.inventory().quantity(BloodType::OPos), 20);
    let status = bank.inventory().allocator().status();
    assert_eq!(status.used, 20);
    assert_eq!(status.available, 980);
    assert!(bank.queue().is_empty());
    assert_consistent(&bank);
}

#[test]
fn test_capacity_exhausted_leaves_state_unchanged() {
    let (mut bank, _) = bank_with(BankConfig {
        total_capacity: 200,
        block_size: 100,
        ..Default::default()
    });
    bank.deposit(BloodType::APos, 100).unwrap();
    bank.deposit(BloodType::BPos, 60).unwrap();

    let before = bank.inventory_snapshot();
    let err = bank.deposit(BloodType::ONeg, 10).unwrap_err();
    assert!(matches!(
        err,
        BankError::Inventory(InventoryError::CapacityExhausted { .. })
    ));
    assert_eq!(bank.inventory_snapshot(), before);
}

#[test]
fn test_batch_larger_than_block_is_refused() {
    let mut bank = bank();
    assert!(bank.deposit(BloodType::AbPos, 101).is_err());
    assert_eq!(bank.inventory().quantity(BloodType::AbPos), 0);
}

#[test]
fn test_withdraw_never_spans_blocks() {
    let mut bank = bank();
    bank.deposit(BloodType::ANeg, 30).unwrap();
    bank.deposit(BloodType::ANeg, 30).unwrap();

    // The ledger holds 60, but no single block holds 40.
    let err = bank.withdraw(BloodType::ANeg, 40).unwrap_err();
    assert!(matches!(
        err,
        BankError::Inventory(InventoryError::AllocatorLedgerMismatch { .. })
    ));
    assert_eq!(bank.inventory().quantity(BloodType::ANeg), 60);
    assert_consistent(&bank);
}

#[test]
fn test_expiry_follows_clock() {
    let (mut bank, clock) = bank_with(BankConfig {
        shelf_life_days: 2,
        ..Default::default()
    });
    bank.deposit(BloodType::BNeg, 10).unwrap();
    let expiry = bank.inventory().entry(BloodType::BNeg).expiry.unwrap();
    assert_eq!(expiry, Timestamp::from_millis(0).plus_days(2));

    clock.advance_days(3);
    assert_eq!(bank.inventory_snapshot().expired_blocks, 1);
}

// ── Scheduling ─────────────────────────────────────────────────

#[test]
fn test_round_robin_stalls_instead_of_looping() {
    let mut bank = bank();
    bank.deposit(BloodType::APos, 20).unwrap();
    bank.submit(BloodType::APos, 15, 3).unwrap();
    bank.submit(BloodType::ONeg, 5, 9).unwrap();

    let report = bank.process_round_robin();
    assert_eq!(report.units_served_for(RequestId(1)), 15);
    assert_eq!(report.stalled.len(), 1);
    assert_eq!(report.stalled[0].id, RequestId(2));
    assert_eq!(bank.queue().len(), 1);
    assert_eq!(bank.inventory().quantity(BloodType::APos), 5);
    assert_consistent(&bank);
}

#[test]
fn test_priority_serves_urgent_first_and_keeps_queue() {
    let mut bank = bank();
    bank.deposit(BloodType::OPos, 40).unwrap();
    bank.submit(BloodType::OPos, 30, 2).unwrap();
    bank.submit(BloodType::OPos, 25, 10).unwrap();
    bank.submit(BloodType::OPos, 10, 6).unwrap();

    let report = bank.process_priority();
    let ids: Vec<u32> = report.processed.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(report.skipped, vec![RequestId(1)]);
    assert_eq!(bank.inventory().quantity(BloodType::OPos), 5);
    assert_eq!(bank.queue().len(), 3);
    assert_consistent(&bank);
}

#[test]
fn test_empty_queue_processing_is_idempotent() {
    let mut bank = bank();
    bank.deposit(BloodType::AbNeg, 10).unwrap();
    let before = bank.inventory_snapshot();

    assert!(bank.process_round_robin().is_empty());
    assert!(bank.process_priority().is_empty());
    assert_eq!(bank.inventory_snapshot(), before);
}

// ── Safety ─────────────────────────────────────────────────────

#[test]
fn test_safety_check_follows_stock() {
    let mut bank = bank();
    bank.deposit(BloodType::BPos, 5).unwrap();
    bank.submit(BloodType::BPos, 3, 1).unwrap();
    bank.submit(BloodType::BPos, 3, 1).unwrap();

    let sequence = bank.safety_check().unwrap();
    assert_eq!(sequence.len(), 2);

    let before = bank.inventory_snapshot();
    bank.withdraw(BloodType::BPos, 3).unwrap();
    assert!(matches!(
        bank.safety_check(),
        Err(BankError::Safety(SafetyError::UnsafeState { .. }))
    ));
    // The check itself changed nothing beyond the explicit withdrawal.
    assert_eq!(bank.inventory_snapshot().total_units(), before.total_units() - 3);
    assert_eq!(bank.queue().len(), 2);
}

#[test]
fn test_safety_rows_match_queue() {
    let mut bank = bank();
    bank.deposit(BloodType::APos, 10).unwrap();
    bank.submit(BloodType::APos, 4, 1).unwrap();
    bank.submit(BloodType::ONeg, 7, 1).unwrap();

    let snapshot = bank.safety_snapshot().unwrap();
    let rows: Vec<_> = snapshot.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].need[BloodType::APos.index()], 4);
    assert_eq!(rows[1].need[BloodType::ONeg.index()], 7);
    assert_eq!(snapshot.available()[BloodType::APos.index()], 10);
}

// ── Scenario ───────────────────────────────────────────────────

#[test]
fn test_scenario_file() {
    let script = r#"
name = "shift"

[[step]]
action = "deposit"
blood_type = "A+"
units = 60

[[step]]
action = "submit"
blood_type = "A+"
units = 25
priority = 4

[[step]]
action = "submit"
blood_type = "A+"
units = 25
priority = 8

[[step]]
action = "safety-check"

[[step]]
action = "process"
"#;
    let path = std::env::temp_dir().join(format!("blood-bank-scenario-{}.toml", std::process::id()));
    std::fs::write(&path, script).unwrap();
    let scenario = Scenario::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut bank = bank();
    let outcomes = scenario.run(&mut bank);
    assert_eq!(outcomes.len(), 5);
    assert!(outcomes.iter().all(|o| o.is_ok()));

    match &outcomes[3].result {
        Ok(StepResult::SafetyChecked(verdict)) => assert!(verdict.is_safe()),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(bank.inventory().quantity(BloodType::APos), 10);
    // deposit, two submissions, safety check, processing run
    assert_eq!(bank.audit_log().len(), 5);
}

#[test]
fn test_missing_scenario_file() {
    let err = Scenario::from_file(std::path::Path::new("/nonexistent/scenario.toml")).unwrap_err();
    assert!(matches!(err, BankError::Scenario(_)));
}
