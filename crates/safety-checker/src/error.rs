// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the safety check.

/// Errors from building a snapshot or running the safety check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SafetyError {
    /// No completion order exists for the remaining processes.
    #[error("unsafe state: {unfinished} of {total} processes can never finish")]
    UnsafeState { unfinished: usize, total: usize },

    /// A vector does not have one entry per resource.
    #[error("process {process}: expected {expected} resources, got {actual}")]
    DimensionMismatch {
        process: u32,
        expected: usize,
        actual: usize,
    },

    /// A process holds more of a resource than is available.
    #[error("process {process}: allocation {allocation} of resource {resource} exceeds available {available}")]
    AllocationExceedsAvailable {
        process: u32,
        resource: usize,
        allocation: u64,
        available: u64,
    },

    /// A process holds more of a resource than it declared as its maximum.
    #[error("process {process}: allocation {allocation} of resource {resource} exceeds maximum demand {max_demand}")]
    AllocationExceedsDemand {
        process: u32,
        resource: usize,
        allocation: u64,
        max_demand: u64,
    },
}
