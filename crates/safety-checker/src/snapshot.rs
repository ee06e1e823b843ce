// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The resource state a safety check runs against.
//!
//! A [`SafetySnapshot`] is built fresh for every query and never outlives
//! it. Adding a process moves its allocation out of `available`, so after
//! all processes are added `available` holds what is free to hand out.

use crate::SafetyError;

/// One process: what it holds and the most it may ever hold.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProcessState {
    pub id: u32,
    pub allocation: Vec<u64>,
    pub max_demand: Vec<u64>,
}

impl ProcessState {
    /// What the process may still ask for: `max_demand - allocation`.
    pub fn need(&self) -> Vec<u64> {
        self.max_demand
            .iter()
            .zip(&self.allocation)
            .map(|(max, held)| max - held)
            .collect()
    }
}

/// One line of the allocation table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StateRow {
    pub id: u32,
    pub allocation: Vec<u64>,
    pub max_demand: Vec<u64>,
    pub need: Vec<u64>,
}

/// Available resources plus every process competing for them.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct SafetySnapshot {
    available: Vec<u64>,
    processes: Vec<ProcessState>,
}

impl SafetySnapshot {
    /// Starts a snapshot with `available[j]` units of resource `j`.
    pub fn new(available: Vec<u64>) -> Self {
        Self {
            available,
            processes: Vec::new(),
        }
    }

    /// Adds a process and takes its allocation out of `available`.
    ///
    /// Nothing changes if the vectors have the wrong length, if the
    /// allocation exceeds the declared maximum, or if it exceeds what is
    /// still available.
    pub fn add_process(&mut self, id: u32, max_demand: Vec<u64>, allocation: Vec<u64>) -> Result<(), SafetyError> {
        let expected = self.available.len();
        for actual in [max_demand.len(), allocation.len()] {
            if actual != expected {
                return Err(SafetyError::DimensionMismatch {
                    process: id,
                    expected,
                    actual,
                });
            }
        }

        for (resource, (&held, &max)) in allocation.iter().zip(&max_demand).enumerate() {
            if held > max {
                return Err(SafetyError::AllocationExceedsDemand {
                    process: id,
                    resource,
                    allocation: held,
                    max_demand: max,
                });
            }
            if held > self.available[resource] {
                return Err(SafetyError::AllocationExceedsAvailable {
                    process: id,
                    resource,
                    allocation: held,
                    available: self.available[resource],
                });
            }
        }

        for (free, held) in self.available.iter_mut().zip(&allocation) {
            *free -= held;
        }
        self.processes.push(ProcessState {
            id,
            allocation,
            max_demand,
        });
        Ok(())
    }

    pub fn available(&self) -> &[u64] {
        &self.available
    }

    pub fn processes(&self) -> &[ProcessState] {
        &self.processes
    }

    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Allocation, maximum and need for each process, in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = StateRow> + '_ {
        self.processes.iter().map(|p| StateRow {
            id: p.id,
            allocation: p.allocation.clone(),
            max_demand: p.max_demand.clone(),
            need: p.need(),
        })
    }
}
