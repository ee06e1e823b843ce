// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # blood-bank
//!
//! Command-line interface for the blood bank allocation engine.
//!
//! ## Usage
//! ```bash
//! # Replay a scenario file step by step
//! blood-bank run --scenario ./demos/scenario.toml
//!
//! # Built-in walkthrough of both policies and the safety check
//! blood-bank demo
//!
//! # Stock, queue and storage tables (optionally after a scenario)
//! blood-bank status --scenario ./demos/scenario.toml
//!
//! # Print the effective configuration
//! blood-bank --config ./demos/bank.toml config
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blood-bank",
    about = "Block allocation, request scheduling and safety checks for a blood bank",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file and print the outcome of every step.
    Run {
        /// Path to the scenario TOML file.
        #[arg(short, long)]
        scenario: PathBuf,

        /// Print the audit log after the run.
        #[arg(long)]
        audit: bool,
    },

    /// Walk through deposits, both processing policies and a safety check.
    Demo,

    /// Display stock, pending requests and storage occupancy.
    Status {
        /// Replay this scenario quietly before reporting.
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Emit the status as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { scenario, audit } => commands::run::execute(config, scenario, audit),
        Commands::Demo => commands::demo::execute(config),
        Commands::Status { scenario, json } => commands::status::execute(config, scenario, json),
        Commands::Config => commands::config::execute(config),
    }
}
