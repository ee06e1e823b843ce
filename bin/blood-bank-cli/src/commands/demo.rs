// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `blood-bank demo` command: a fixed walkthrough of the engine.
//!
//! Stocks a few blood types, queues requests, checks safety, then runs
//! the same queue through both policies on separate banks so the
//! outcomes can be compared.

use super::{print_banner, print_inventory, print_queue, print_report, print_safety_table, print_storage};
use blood_bank::{BankConfig, BloodBank};
use blood_types::BloodType;

const STOCK: [(BloodType, u32); 4] = [
    (BloodType::OPos, 50),
    (BloodType::APos, 40),
    (BloodType::ONeg, 20),
    (BloodType::BPos, 15),
];

const REQUESTS: [(BloodType, u32, u8); 5] = [
    (BloodType::OPos, 30, 5),
    (BloodType::APos, 25, 2),
    (BloodType::ONeg, 25, 9),
    (BloodType::APos, 10, 7),
    (BloodType::BPos, 12, 4),
];

pub fn execute(config: BankConfig) -> anyhow::Result<()> {
    print_banner("Demo");

    let mut bank = stocked_bank(&config)?;

    // ── Stock and Queue ────────────────────────────────────────
    println!("  Stock");
    print_inventory(&bank.inventory_snapshot());
    println!("  Storage");
    print_storage(&bank.inventory().allocator().status());
    println!("  Pending Requests (FIFO)");
    print_queue(&bank.queue_snapshot());
    println!("  Pending Requests (by priority)");
    print_queue(&bank.queue().by_priority());

    // ── Safety ─────────────────────────────────────────────────
    println!("  Safety Check (need per blood type)");
    print_safety_table(&bank.safety_snapshot()?);
    match bank.safety_check() {
        Ok(sequence) => {
            let ids: Vec<u32> = sequence.iter().map(|id| id.0).collect();
            println!("  Safe state. Sequence: {ids:?}");
        }
        Err(e) => println!("  UNSAFE: {e}"),
    }
    println!();

    // ── Round-Robin ────────────────────────────────────────────
    println!("  Round-Robin (quantum {} units)", config.time_quantum);
    let report = bank.process_round_robin();
    print_report(&report);
    print_inventory(&bank.inventory_snapshot());

    // ── Priority ───────────────────────────────────────────────
    let mut bank = stocked_bank(&config)?;
    println!("  Priority (same stock and queue)");
    let report = bank.process_priority();
    print_report(&report);
    print_inventory(&bank.inventory_snapshot());

    println!("  {}", bank.inventory().allocator().stats().summary());
    Ok(())
}

fn stocked_bank(config: &BankConfig) -> anyhow::Result<BloodBank> {
    let mut bank = BloodBank::with_system_clock(config.clone())?;
    for (t, units) in STOCK {
        bank.deposit(t, units)?;
    }
    for (t, units, priority) in REQUESTS {
        bank.submit(t, units, priority)?;
    }
    Ok(bank)
}
