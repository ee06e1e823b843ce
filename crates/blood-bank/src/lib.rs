// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # blood-bank
//!
//! The facade that ties the engine together.
//!
//! [`BloodBank`] takes:
//! - A [`BankConfig`] (storage layout, shelf life, time quantum, policy).
//! - A [`block_allocator::Clock`] for intake, expiry and audit stamps.
//!
//! And owns the `Inventory`, the `RequestQueue` and the `SafetyChecker`,
//! recording every operation in an [`AuditLog`].
//!
//! # Scenarios
//! A [`Scenario`] is a TOML list of steps run against a bank in order.
//! Each step yields a [`StepOutcome`]; failures are recorded and the run
//! carries on.
//!
//! # Threads
//! The engine is synchronous. [`SharedBloodBank`] puts one bank behind a
//! single mutex for callers that need to share it.

mod audit;
mod bank;
mod config;
mod error;
mod report;
mod scenario;
mod shared;

pub use audit::{AuditEntry, AuditEvent, AuditLog};
pub use bank::BloodBank;
pub use config::BankConfig;
pub use error::BankError;
pub use report::{BankStatus, SafetyVerdict};
pub use scenario::{Scenario, Step, StepOutcome, StepResult};
pub use shared::SharedBloodBank;
