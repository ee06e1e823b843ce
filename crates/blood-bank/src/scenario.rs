// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scripted sequences of bank operations.
//!
//! # TOML Format
//! ```toml
//! name = "morning shift"
//!
//! [[step]]
//! action = "deposit"
//! blood_type = "O+"
//! units = 50
//!
//! [[step]]
//! action = "submit"
//! blood_type = "O+"
//! units = 30
//! priority = 5
//!
//! [[step]]
//! action = "process-round-robin"
//! ```
//!
//! Blood types are kept as text until the step runs, so a bad name fails
//! that step only. A failing step is recorded and the run continues.

use crate::{BankError, BankStatus, BloodBank, SafetyVerdict};
use blood_types::BloodType;
use request_scheduler::{ProcessingReport, RequestId};
use safety_checker::SafetyError;
use std::path::Path;

/// One scripted operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Deposit { blood_type: String, units: u32 },
    Withdraw { blood_type: String, units: u32 },
    Submit { blood_type: String, units: u32, priority: u8 },
    Cancel { id: u32 },
    /// Runs the configured policy.
    Process,
    ProcessRoundRobin,
    ProcessPriority,
    SafetyCheck,
    Status,
}

impl Step {
    /// Short label for tables and logs.
    pub fn label(&self) -> String {
        match self {
            Self::Deposit { blood_type, units } => format!("deposit {units} {blood_type}"),
            Self::Withdraw { blood_type, units } => format!("withdraw {units} {blood_type}"),
            Self::Submit {
                blood_type,
                units,
                priority,
            } => format!("submit {units} {blood_type} p{priority}"),
            Self::Cancel { id } => format!("cancel {id}"),
            Self::Process => "process".to_string(),
            Self::ProcessRoundRobin => "process round-robin".to_string(),
            Self::ProcessPriority => "process priority".to_string(),
            Self::SafetyCheck => "safety check".to_string(),
            Self::Status => "status".to_string(),
        }
    }
}

/// What a successful step produced.
#[derive(Debug, Clone)]
pub enum StepResult {
    Deposited { blood_type: BloodType, units: u32 },
    Withdrawn { blood_type: BloodType, units: u32 },
    Submitted { id: RequestId },
    Cancelled { found: bool },
    Processed(ProcessingReport),
    /// Safe and unsafe verdicts are both results, not failures.
    SafetyChecked(SafetyVerdict),
    Status(Box<BankStatus>),
}

/// A step together with what came of it.
#[derive(Debug)]
pub struct StepOutcome {
    /// Zero-based position in the scenario.
    pub index: usize,
    pub step: Step,
    pub result: Result<StepResult, BankError>,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// A named list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, BankError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BankError::Scenario(format!("cannot read scenario '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, BankError> {
        toml::from_str(toml_str).map_err(|e| BankError::Scenario(format!("TOML parse error: {e}")))
    }

    /// Runs every step against `bank`, in order.
    pub fn run(&self, bank: &mut BloodBank) -> Vec<StepOutcome> {
        tracing::info!(
            "running scenario '{}' ({} steps)",
            self.name.as_deref().unwrap_or("unnamed"),
            self.steps.len(),
        );

        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let result = run_step(step, bank);
                if let Err(e) = &result {
                    tracing::warn!("step {} ({}) failed: {e}", index + 1, step.label());
                }
                StepOutcome {
                    index,
                    step: step.clone(),
                    result,
                }
            })
            .collect()
    }
}

fn run_step(step: &Step, bank: &mut BloodBank) -> Result<StepResult, BankError> {
    match step {
        Step::Deposit { blood_type, units } => {
            let blood_type: BloodType = blood_type.parse()?;
            bank.deposit(blood_type, *units)?;
            Ok(StepResult::Deposited {
                blood_type,
                units: *units,
            })
        }
        Step::Withdraw { blood_type, units } => {
            let blood_type: BloodType = blood_type.parse()?;
            bank.withdraw(blood_type, *units)?;
            Ok(StepResult::Withdrawn {
                blood_type,
                units: *units,
            })
        }
        Step::Submit {
            blood_type,
            units,
            priority,
        } => {
            let blood_type: BloodType = blood_type.parse()?;
            let id = bank.submit(blood_type, *units, *priority)?;
            Ok(StepResult::Submitted { id })
        }
        Step::Cancel { id } => Ok(StepResult::Cancelled {
            found: bank.cancel(RequestId(*id)).is_some(),
        }),
        Step::Process => Ok(StepResult::Processed(bank.process())),
        Step::ProcessRoundRobin => Ok(StepResult::Processed(bank.process_round_robin())),
        Step::ProcessPriority => Ok(StepResult::Processed(bank.process_priority())),
        Step::SafetyCheck => match bank.safety_check() {
            Ok(sequence) => Ok(StepResult::SafetyChecked(SafetyVerdict::Safe {
                sequence: sequence.into_iter().map(|id| id.0).collect(),
            })),
            Err(BankError::Safety(e @ SafetyError::UnsafeState { .. })) => {
                Ok(StepResult::SafetyChecked(SafetyVerdict::Unsafe {
                    reason: e.to_string(),
                }))
            }
            Err(e) => Err(e),
        },
        Step::Status => Ok(StepResult::Status(Box::new(bank.status()))),
    }
}
