//! Submission state machine
//!
//! `AwaitingAssignmentSelection → AwaitingFileSelection → Submitting →
//! {Succeeded | Failed}`. Every step is accepted once; asking for a step out
//! of order is an [`Error::InvalidTransition`], which keeps a second
//! submission from ever starting.

use crate::error::{Error, Result};
use crate::types::{AssignmentRef, FileRef, SubmissionReceipt};
use std::fmt;

/// Where a submission currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for the assignment choice
    AwaitingAssignmentSelection,
    /// Assignment chosen, waiting for the file choice
    AwaitingFileSelection {
        /// The chosen assignment
        assignment: AssignmentRef,
    },
    /// Upload and record creation in progress
    Submitting {
        /// The chosen assignment
        assignment: AssignmentRef,
        /// The chosen file
        file: FileRef,
    },
    /// Submission recorded
    Succeeded(SubmissionReceipt),
    /// Submission failed; no retry
    Failed(String),
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingAssignmentSelection => write!(f, "awaiting assignment selection"),
            Self::AwaitingFileSelection { .. } => write!(f, "awaiting file selection"),
            Self::Submitting { .. } => write!(f, "submitting"),
            Self::Succeeded(_) => write!(f, "already submitted"),
            Self::Failed(_) => write!(f, "failed"),
        }
    }
}

/// Drives one submission through its states
#[derive(Debug)]
pub struct SubmissionFlow {
    state: FlowState,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionFlow {
    /// Start a new flow waiting for an assignment
    pub const fn new() -> Self {
        Self {
            state: FlowState::AwaitingAssignmentSelection,
        }
    }

    /// Current state
    pub const fn state(&self) -> &FlowState {
        &self.state
    }

    /// Record the assignment choice
    pub fn choose_assignment(&mut self, assignment: AssignmentRef) -> Result<()> {
        match self.state {
            FlowState::AwaitingAssignmentSelection => {
                self.state = FlowState::AwaitingFileSelection { assignment };
                Ok(())
            }
            _ => Err(self.reject("choose an assignment")),
        }
    }

    /// Record the file choice and move to submitting
    ///
    /// Returns the targets to submit.
    pub fn choose_file(&mut self, file: FileRef) -> Result<(AssignmentRef, FileRef)> {
        match &self.state {
            FlowState::AwaitingFileSelection { assignment } => {
                let assignment = assignment.clone();
                self.state = FlowState::Submitting {
                    assignment: assignment.clone(),
                    file: file.clone(),
                };
                Ok((assignment, file))
            }
            _ => Err(self.reject("choose a file")),
        }
    }

    /// Record the outcome of the submission
    pub fn finish(&mut self, outcome: Result<SubmissionReceipt>) -> Result<SubmissionReceipt> {
        if !matches!(self.state, FlowState::Submitting { .. }) {
            return Err(self.reject("finish a submission"));
        }
        match outcome {
            Ok(receipt) => {
                self.state = FlowState::Succeeded(receipt.clone());
                Ok(receipt)
            }
            Err(e) => {
                self.state = FlowState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn reject(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            action,
            state: self.state.to_string(),
        }
    }
}
