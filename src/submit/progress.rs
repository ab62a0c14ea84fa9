//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different front ends (terminal, tests) to receive
//! progress updates during a submission.

use crate::types::SubmissionReceipt;
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving the token and fetching the course
    Connecting,
    /// Listing assignments and waiting for a choice
    SelectingAssignment,
    /// Listing local files and waiting for a choice
    SelectingFile,
    /// Uploading file bytes
    Uploading,
    /// Creating the submission record
    Submitting,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Connecting => "Connecting to Canvas",
            Self::SelectingAssignment => "Select assignment to submit to",
            Self::SelectingFile => "Select a file to submit",
            Self::Uploading => "Uploading",
            Self::Submitting => "Submitting",
            Self::Complete => "Done",
        };
        write!(f, "{text}")
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during submission.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the submission record exists
    async fn on_submitted(&self, receipt: &SubmissionReceipt);

    /// Called with a general status message or hint
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_submitted(&self, _receipt: &SubmissionReceipt) {}
    async fn on_message(&self, _message: &str) {}
}
