// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `blood-bank run` command: replay a scenario file.
//!
//! Each step is printed with its outcome. A failed step is reported and
//! the run continues with the next one.

use super::{format_timestamp, print_banner, print_inventory, print_queue, print_report, print_verdict};
use blood_bank::{BankConfig, BloodBank, Scenario, StepOutcome, StepResult};
use std::path::PathBuf;

pub fn execute(config: BankConfig, scenario_path: PathBuf, audit: bool) -> anyhow::Result<()> {
    print_banner("Scenario Runner");

    let scenario = Scenario::from_file(&scenario_path)?;
    let mut bank = BloodBank::with_system_clock(config)?;

    println!("  Scenario: {}", scenario.name.as_deref().unwrap_or("(unnamed)"));
    println!("  File:     {}", scenario_path.display());
    println!("  Steps:    {}", scenario.steps.len());
    println!("  Policy:   {}", bank.policy_name());
    println!();

    let outcomes = scenario.run(&mut bank);
    for outcome in &outcomes {
        print_outcome(outcome);
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    println!("  {} steps, {} ok, {} failed", outcomes.len(), outcomes.len() - failed, failed);
    println!();

    if audit {
        println!("  Audit Log");
        for entry in bank.audit_log().entries() {
            println!("   {}  {}", format_timestamp(entry.at), entry.event);
        }
        println!();
    }

    println!("{}", bank.status().summary());
    Ok(())
}

fn print_outcome(outcome: &StepOutcome) {
    let label = outcome.step.label();
    match &outcome.result {
        Err(e) => {
            println!("  [{:>2}] {label:<28} FAILED: {e}", outcome.index + 1);
            println!();
        }
        Ok(result) => match result {
            StepResult::Deposited { .. } | StepResult::Withdrawn { .. } => {
                println!("  [{:>2}] {label:<28} ok", outcome.index + 1);
            }
            StepResult::Submitted { id } => {
                println!("  [{:>2}] {label:<28} ok (request {id})", outcome.index + 1);
            }
            StepResult::Cancelled { found } => {
                let note = if *found { "ok" } else { "no such request" };
                println!("  [{:>2}] {label:<28} {note}", outcome.index + 1);
            }
            StepResult::Processed(report) => {
                println!("  [{:>2}] {label}", outcome.index + 1);
                print_report(report);
            }
            StepResult::SafetyChecked(verdict) => {
                println!("  [{:>2}] {label}", outcome.index + 1);
                print_verdict(verdict);
            }
            StepResult::Status(status) => {
                println!("  [{:>2}] {label}", outcome.index + 1);
                print_inventory(&status.inventory);
                print_queue(&status.pending);
            }
        },
    }
}
