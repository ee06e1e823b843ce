// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bank configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! total_capacity = 1000
//! block_size = 100
//! shelf_life_days = 30
//! time_quantum = 10
//! policy = "round-robin"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use crate::BankError;
use block_allocator::{StorageLayout, DEFAULT_SHELF_LIFE_DAYS};
use request_scheduler::{policy, SchedulingPolicy, DEFAULT_TIME_QUANTUM};
use std::path::Path;

/// Configuration for a [`crate::BloodBank`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Total storage capacity in units.
    pub total_capacity: u32,
    /// Capacity of each storage block in units.
    pub block_size: u32,
    /// Days from intake until a batch expires.
    pub shelf_life_days: u32,
    /// Units served per round-robin slice.
    pub time_quantum: u32,
    /// Policy used by [`crate::BloodBank::process`]: `"round-robin"` or `"priority"`.
    pub policy: String,
}

impl BankConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, BankError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BankError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, BankError> {
        toml::from_str(toml_str).map_err(|e| BankError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, BankError> {
        toml::to_string_pretty(self)
            .map_err(|e| BankError::Config(format!("TOML serialise error: {e}")))
    }

    /// The storage layout described by this config.
    pub fn layout(&self) -> Result<StorageLayout, BankError> {
        Ok(StorageLayout::new(self.total_capacity, self.block_size)?)
    }

    /// Creates the processing policy named by this config.
    pub fn create_policy(&self) -> Result<Box<dyn SchedulingPolicy>, BankError> {
        Ok(policy::from_name(&self.policy, self.time_quantum)?)
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        let layout = StorageLayout::default();
        Self {
            total_capacity: layout.total_capacity(),
            block_size: layout.block_size(),
            shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
            time_quantum: DEFAULT_TIME_QUANTUM,
            policy: "round-robin".to_string(),
        }
    }
}
