// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `blood-bank config` command: print the effective configuration.

use blood_bank::BankConfig;

pub fn execute(config: BankConfig) -> anyhow::Result<()> {
    // Validate before printing so a bad file is reported, not echoed.
    let layout = config.layout()?;
    let policy = config.create_policy()?;
    tracing::info!("layout {layout}, policy '{}'", policy.name());

    print!("{}", config.to_toml()?);
    Ok(())
}
