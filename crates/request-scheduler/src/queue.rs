// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The FIFO of pending requests.

use crate::{Request, RequestId};
use std::collections::VecDeque;

/// Pending requests in submission order.
///
/// Ids are supplied by the caller and are not checked for uniqueness; the
/// round-robin policy relies on remainders reusing the id of the request
/// they came from.
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    pending: VecDeque<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request to the back of the queue.
    pub fn submit(&mut self, request: Request) {
        tracing::debug!(
            "request {} queued: {} units of {} (priority {})",
            request.id,
            request.units,
            request.blood_type,
            request.priority,
        );
        self.pending.push_back(request);
    }

    /// Conventional id for the next submission: current length + 1.
    pub fn next_id(&self) -> RequestId {
        RequestId(self.pending.len() as u32 + 1)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates in FIFO order.
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.pending.iter()
    }

    /// Copy of the pending requests in FIFO order.
    pub fn snapshot(&self) -> Vec<Request> {
        self.pending.iter().copied().collect()
    }

    /// Copy of the pending requests, highest priority first.
    ///
    /// The sort is stable, so equal priorities keep submission order.
    pub fn by_priority(&self) -> Vec<Request> {
        let mut ordered = self.snapshot();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
        ordered
    }

    /// Removes the first pending request with `id`.
    pub fn remove(&mut self, id: RequestId) -> Option<Request> {
        let index = self.pending.iter().position(|r| r.id == id)?;
        self.pending.remove(index)
    }

    /// Drops every pending request.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub(crate) fn pop_front(&mut self) -> Option<Request> {
        self.pending.pop_front()
    }

    pub(crate) fn push_back(&mut self, request: Request) {
        self.pending.push_back(request);
    }
}
