// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommands and the table rendering they share.

pub mod config;
pub mod demo;
pub mod run;
pub mod status;

use block_allocator::{AllocatorStatus, Timestamp};
use blood_bank::{BankConfig, SafetyVerdict};
use inventory::InventorySnapshot;
use request_scheduler::{ProcessingReport, Request};
use safety_checker::SafetySnapshot;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Reads `--config` if given, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<BankConfig> {
    match path {
        Some(p) => {
            let config = BankConfig::from_file(p)?;
            tracing::info!("loaded config from {}", p.display());
            Ok(config)
        }
        None => Ok(BankConfig::default()),
    }
}

pub fn print_banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║{:^54}║", format!("blood-bank · {title}"));
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}

pub fn print_inventory(snapshot: &InventorySnapshot) {
    println!("  {:<6} {:>6}  {:<17}", "Type", "Units", "Expiry");
    println!("  {}", "-".repeat(31));
    for row in &snapshot.rows {
        let expiry = row.expiry.map(format_timestamp).unwrap_or_else(|| "N/A".to_string());
        println!("  {:<6} {:>6}  {:<17}", row.blood_type.as_str(), row.quantity, expiry);
    }
    println!("  {}", "-".repeat(31));
    println!("  {:<6} {:>6}", "Total", snapshot.total_units());
    if snapshot.expired_blocks > 0 {
        println!("  WARNING: {} storage blocks past expiry", snapshot.expired_blocks);
    }
    println!();
}

pub fn print_storage(status: &AllocatorStatus) {
    let ratio = if status.total == 0 {
        0.0
    } else {
        status.used as f64 / status.total as f64
    };
    println!("   Total:        {} units", status.total);
    println!("   Used:         {} units ({:.1}%)  {}", status.used, ratio * 100.0, usage_bar(ratio));
    println!("   Available:    {} units", status.available);
    println!();
}

pub fn print_queue(requests: &[Request]) {
    if requests.is_empty() {
        println!("  No pending requests.");
        println!();
        return;
    }
    println!("  {:<4} {:<6} {:>6} {:>9}", "ID", "Type", "Units", "Priority");
    println!("  {}", "-".repeat(28));
    for r in requests {
        println!(
            "  {:<4} {:<6} {:>6} {:>9}",
            r.id.0,
            r.blood_type.as_str(),
            r.units,
            r.priority.get(),
        );
    }
    println!();
}

pub fn print_report(report: &ProcessingReport) {
    if report.processed.is_empty() {
        println!("  No withdrawals.");
    } else {
        println!("  {:<4} {:<6} {:>6}", "ID", "Type", "Units");
        println!("  {}", "-".repeat(18));
        for p in &report.processed {
            println!("  {:<4} {:<6} {:>6}", p.id.0, p.blood_type.as_str(), p.units);
        }
    }
    if !report.skipped.is_empty() {
        let ids: Vec<u32> = report.skipped.iter().map(|id| id.0).collect();
        println!("  Skipped: {ids:?}");
    }
    if !report.stalled.is_empty() {
        let ids: Vec<u32> = report.stalled.iter().map(|r| r.id.0).collect();
        println!("  Stalled (still pending): {ids:?}");
    }
    println!("  {}", report.summary());
    println!();
}

/// The allocation table: one row per request, need per blood type.
pub fn print_safety_table(snapshot: &SafetySnapshot) {
    print!("  {:<4}", "ID");
    for t in blood_types::BloodType::ALL {
        print!(" {:>5}", t.as_str());
    }
    println!();
    println!("  {}", "-".repeat(4 + 6 * blood_types::BloodType::COUNT));
    for row in snapshot.rows() {
        print!("  {:<4}", row.id);
        for need in &row.need {
            print!(" {need:>5}");
        }
        println!();
    }
    print!("  {:<4}", "Free");
    for free in snapshot.available() {
        print!(" {free:>5}");
    }
    println!();
    println!();
}

pub fn print_verdict(verdict: &SafetyVerdict) {
    match verdict {
        SafetyVerdict::Safe { sequence } => println!("  Safe state. Sequence: {sequence:?}"),
        SafetyVerdict::Unsafe { reason } => println!("  UNSAFE: {reason}"),
    }
    println!();
}

/// UTC date and time for a Unix-millisecond stamp.
pub fn format_timestamp(ts: Timestamp) -> String {
    i64::try_from(ts.as_millis())
        .ok()
        .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Creates a visual usage bar (0.0-1.0 scale).
fn usage_bar(ratio: f64) -> String {
    let filled = (ratio * 20.0).round() as usize;
    let filled = filled.min(20);
    let empty = 20 - filled;
    let symbol = if ratio >= 0.9 {
        "#"
    } else if ratio >= 0.7 {
        "="
    } else {
        "-"
    };
    format!("[{}{}]", symbol.repeat(filled), ".".repeat(empty))
}
