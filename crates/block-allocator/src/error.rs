// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the block allocator.

/// Errors that can occur while configuring the storage pool.
///
/// Allocation and release themselves report success as `bool`; a pool
/// that is merely full is not an error at this layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocatorError {
    /// The pool geometry cannot produce at least one block.
    #[error("invalid storage layout {total_capacity}/{block_size}: {reason}")]
    InvalidLayout {
        total_capacity: u32,
        block_size: u32,
        reason: &'static str,
    },

    /// A layout string could not be parsed.
    #[error("invalid layout string '{input}': expected '<total>/<block size>', e.g. '1000/100'")]
    UnparsableLayout { input: String },
}
