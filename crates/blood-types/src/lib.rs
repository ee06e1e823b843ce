// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # blood-types
//!
//! The fixed set of resource categories tracked by the blood bank engine.
//!
//! Every other crate in the workspace indexes per-category state (ledger
//! rows, safety-check resource vectors) by [`BloodType::index`], so the
//! canonical order below is part of the contract:
//!
//! ```text
//! A+  A-  B+  B-  AB+  AB-  O+  O-
//! 0   1   2   3   4    5    6   7
//! ```
//!
//! # Example
//! ```
//! use blood_types::BloodType;
//!
//! let t: BloodType = "o+".parse().unwrap();
//! assert_eq!(t, BloodType::OPos);
//! assert_eq!(t.to_string(), "O+");
//! assert_eq!(t.index(), 6);
//! ```

mod blood_type;
mod error;

pub use blood_type::BloodType;
pub use error::BloodTypeError;
