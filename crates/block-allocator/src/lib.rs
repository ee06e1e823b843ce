// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # block-allocator
//!
//! A static pool of fixed-size storage blocks for blood units, with
//! best-fit placement.
//!
//! # Key Components
//!
//! - [`StorageLayout`] — pool geometry (total capacity and block size),
//!   with a compact `"1000/100"` string form.
//! - [`BlockAllocator`] — the allocator: one batch per block, best-fit
//!   placement, first-fit release, occupancy status.
//! - [`StorageBlock`] — a read-only view of one block's occupancy and
//!   intake/expiry stamps.
//! - [`Clock`] — the injected time source; [`SystemClock`] in production,
//!   [`ManualClock`] in tests.
//! - [`AllocationStats`] — cumulative allocator counters.
//!
//! # Placement Model
//!
//! ```text
//! allocate(O+, 50)                    release(O+, 50)
//!   │ free blocks with cap >= 50        │ first O+ block with used >= 50
//!   │ min(cap - 50), lowest index       │ used -= 50
//!   ▼                                   ▼
//! [ 0: A+ 80 ][ 1: O+ 50 ][ 2: free ]  [ 0: A+ 80 ][ 1: free ][ 2: free ]
//! ```
//!
//! A batch never spans blocks in either direction: allocation refuses
//! batches larger than any free block, and release refuses amounts that
//! no single block of that type holds.

mod allocator;
mod block;
mod clock;
mod error;
mod layout;
mod stats;

#[cfg(test)]
mod proptests;

pub use allocator::{AllocatorStatus, BlockAllocator, DEFAULT_SHELF_LIFE_DAYS};
pub use block::StorageBlock;
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use error::AllocatorError;
pub use layout::StorageLayout;
pub use stats::AllocationStats;
