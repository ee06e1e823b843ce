// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `blood-bank status` command: display stock, queue and storage state.
//!
//! The engine keeps no state between invocations, so without
//! `--scenario` this shows an empty bank under the current configuration.

use super::{print_banner, print_inventory, print_queue, print_storage, print_verdict};
use blood_bank::{BankConfig, BloodBank, Scenario};
use std::path::PathBuf;

pub fn execute(config: BankConfig, scenario: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let mut bank = BloodBank::with_system_clock(config)?;

    if let Some(path) = scenario {
        let outcomes = Scenario::from_file(&path)?.run(&mut bank);
        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        if failed > 0 {
            tracing::warn!("{failed} of {} scenario steps failed", outcomes.len());
        }
    }

    let status = bank.status();
    if json {
        println!("{}", status.to_json()?);
        return Ok(());
    }

    print_banner("Status");

    println!("  Stock");
    print_inventory(&status.inventory);

    println!("  Storage");
    print_storage(&status.inventory.storage);
    println!("   {}", status.storage_stats.summary());
    println!();

    println!("  Pending Requests");
    print_queue(&status.pending);

    println!("  Safety");
    match &status.last_safety {
        Some(verdict) => print_verdict(verdict),
        None => {
            println!("  Not checked yet.");
            println!();
        }
    }

    println!("{}", status.summary());
    Ok(())
}
