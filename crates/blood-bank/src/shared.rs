// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A [`BloodBank`] that can be shared across threads.
//!
//! Every call takes one lock around the whole bank, so an allocator change
//! and its ledger update are never observed separately.

use crate::{BankError, BankStatus, BloodBank};
use blood_types::BloodType;
use request_scheduler::{ProcessingReport, RequestId};
use std::sync::{Arc, Mutex};

/// Cloneable handle to one bank behind a mutex.
#[derive(Clone)]
pub struct SharedBloodBank {
    inner: Arc<Mutex<BloodBank>>,
}

impl SharedBloodBank {
    pub fn new(bank: BloodBank) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bank)),
        }
    }

    /// Runs `f` with exclusive access to the bank.
    pub fn with<R>(&self, f: impl FnOnce(&mut BloodBank) -> R) -> Result<R, BankError> {
        let mut bank = self.inner.lock().map_err(|_| BankError::LockPoisoned)?;
        Ok(f(&mut bank))
    }

    pub fn deposit(&self, blood_type: BloodType, units: u32) -> Result<(), BankError> {
        self.with(|bank| bank.deposit(blood_type, units))?
    }

    pub fn withdraw(&self, blood_type: BloodType, units: u32) -> Result<(), BankError> {
        self.with(|bank| bank.withdraw(blood_type, units))?
    }

    pub fn submit(&self, blood_type: BloodType, units: u32, priority: u8) -> Result<RequestId, BankError> {
        self.with(|bank| bank.submit(blood_type, units, priority))?
    }

    pub fn process(&self) -> Result<ProcessingReport, BankError> {
        self.with(|bank| bank.process())
    }

    pub fn status(&self) -> Result<BankStatus, BankError> {
        self.with(|bank| bank.status())
    }
}

impl std::fmt::Debug for SharedBloodBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedBloodBank")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish()
    }
}
