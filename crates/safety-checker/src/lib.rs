// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # safety-checker
//!
//! Deadlock-avoidance feasibility via the Banker's algorithm.
//!
//! The check is advisory and read-only: it answers whether some order
//! exists in which every process's remaining need can be met from what is
//! available, releasing each process's allocation as it finishes.
//!
//! ```text
//! work = available
//! loop:
//!   i = first unfinished process with need[i] <= work   (element-wise)
//!   none and some unfinished → UnsafeState
//!   work += allocation[i]; sequence.push(i)
//! ```
//!
//! ```
//! use safety_checker::{SafetyChecker, SafetySnapshot};
//!
//! let mut snapshot = SafetySnapshot::new(vec![5]);
//! snapshot.add_process(1, vec![3], vec![0]).unwrap();
//! snapshot.add_process(2, vec![3], vec![0]).unwrap();
//!
//! let mut checker = SafetyChecker::new();
//! assert_eq!(checker.check(&snapshot), Ok(vec![1, 2]));
//! ```

mod checker;
mod error;
mod snapshot;

#[cfg(test)]
mod proptests;

pub use checker::{find_safe_sequence, SafetyChecker};
pub use error::SafetyError;
pub use snapshot::{ProcessState, SafetySnapshot, StateRow};
