// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Banker's algorithm safety search.

use crate::{SafetyError, SafetySnapshot};

/// Finds one order in which every process can finish.
///
/// Scans from the first process for one whose need fits in `work`,
/// finishes it (returning its allocation to `work`) and restarts the scan.
/// If a full scan finds nothing while processes remain, the state is
/// unsafe and the partial order is discarded.
///
/// Returns process ids in completion order. O(n² · m) for n processes and
/// m resources.
pub fn find_safe_sequence(snapshot: &SafetySnapshot) -> Result<Vec<u32>, SafetyError> {
    let processes = snapshot.processes();
    let needs: Vec<Vec<u64>> = processes.iter().map(|p| p.need()).collect();
    let mut work = snapshot.available().to_vec();
    let mut finished = vec![false; processes.len()];
    let mut sequence = Vec::with_capacity(processes.len());

    while sequence.len() < processes.len() {
        let candidate = (0..processes.len())
            .find(|&i| !finished[i] && needs[i].iter().zip(&work).all(|(need, free)| need <= free));

        let Some(i) = candidate else {
            return Err(SafetyError::UnsafeState {
                unfinished: processes.len() - sequence.len(),
                total: processes.len(),
            });
        };

        finished[i] = true;
        for (free, held) in work.iter_mut().zip(&processes[i].allocation) {
            *free += held;
        }
        sequence.push(processes[i].id);
    }

    Ok(sequence)
}

/// Runs safety checks and keeps the outcome of the latest one.
#[derive(Debug, Clone, Default)]
pub struct SafetyChecker {
    last: Option<Result<Vec<u32>, SafetyError>>,
}

impl SafetyChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `snapshot` and remembers the result.
    pub fn check(&mut self, snapshot: &SafetySnapshot) -> Result<Vec<u32>, SafetyError> {
        let result = find_safe_sequence(snapshot);
        match &result {
            Ok(sequence) => tracing::info!(
                "safe state over {} processes, sequence {:?}",
                snapshot.len(),
                sequence,
            ),
            Err(e) => tracing::warn!("{e}"),
        }
        self.last = Some(result.clone());
        result
    }

    /// Outcome of the most recent [`check`](Self::check), if any.
    pub fn last_result(&self) -> Option<&Result<Vec<u32>, SafetyError>> {
        self.last.as_ref()
    }
}
