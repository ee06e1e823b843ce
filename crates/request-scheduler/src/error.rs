// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for request submission and policy construction.

/// Errors that can occur when building requests or policies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// A request must ask for at least one unit.
    #[error("requested units must be positive")]
    InvalidQuantity,

    /// Priority outside the accepted range.
    #[error("priority {priority} out of range ({min}..={max})")]
    InvalidPriority { priority: u8, min: u8, max: u8 },

    /// A round-robin slice of zero units would never make progress.
    #[error("time quantum must be positive")]
    InvalidTimeQuantum,

    /// The policy name is not recognised.
    #[error("unknown scheduling policy '{name}'; expected 'round-robin' or 'priority'")]
    UnknownPolicy { name: String },
}
