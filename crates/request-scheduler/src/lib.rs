// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # request-scheduler
//!
//! Holds pending blood requests and serves them from an
//! [`inventory::Inventory`] using pluggable policies.
//!
//! # Policies
//!
//! | Policy | Order | Partial service | Refused request |
//! |---|---|---|---|
//! | [`RoundRobin`] | FIFO rotation | yes, `quantum` units per slice | back of the queue |
//! | [`StrictPriority`] | priority desc, stable | no | skipped for this run |
//!
//! # Trait-Based Extensibility
//!
//! Both policies implement [`SchedulingPolicy`], so the bank can be
//! configured with either by name:
//!
//! ```
//! use request_scheduler::policy;
//!
//! let p = policy::from_name("priority", 10).unwrap();
//! assert_eq!(p.name(), "priority");
//! ```

mod error;
pub mod policy;
mod queue;
mod report;
mod request;

#[cfg(test)]
mod proptests;

pub use error::SchedulerError;
pub use policy::priority::StrictPriority;
pub use policy::round_robin::{RoundRobin, DEFAULT_TIME_QUANTUM};
pub use policy::SchedulingPolicy;
pub use queue::RequestQueue;
pub use report::{ProcessedRequest, ProcessingReport};
pub use request::{Priority, Request, RequestId};
