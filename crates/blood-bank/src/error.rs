// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the blood bank facade.

/// Errors surfaced by [`crate::BloodBank`] and its helpers.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    /// Text did not name a blood type.
    #[error("blood type error: {0}")]
    BloodType(#[from] blood_types::BloodTypeError),

    /// The storage layout is invalid.
    #[error("storage error: {0}")]
    Allocator(#[from] block_allocator::AllocatorError),

    /// A deposit or withdrawal was refused.
    #[error("inventory error: {0}")]
    Inventory(#[from] inventory::InventoryError),

    /// A request or policy could not be built.
    #[error("scheduler error: {0}")]
    Scheduler(#[from] request_scheduler::SchedulerError),

    /// The safety check failed or its snapshot could not be built.
    #[error("safety error: {0}")]
    Safety(#[from] safety_checker::SafetyError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A scenario file could not be read or parsed.
    #[error("scenario error: {0}")]
    Scenario(String),

    /// Another thread panicked while holding the shared bank.
    #[error("shared blood bank lock poisoned")]
    LockPoisoned,
}
