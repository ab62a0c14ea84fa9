//! CLI progress callback with styled output and an upload spinner

use crate::cli::style::{check, hyperlink_url, message_box, spinner_style, BoxColor, Stream, Stylize};
use anstream::println;
use async_trait::async_trait;
use canvas_submit::submit::{Phase, ProgressCallback};
use canvas_submit::types::SubmissionReceipt;
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback that prints to stdout
///
/// Shows a spinner between the start of the upload and the end of the
/// submission.
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress printer with no active spinner
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn set_spinner_message(&self, message: &'static str) {
        let mut guard = self.spinner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let spinner = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(spinner_style());
            pb.enable_steady_tick(Duration::from_millis(80));
            pb
        });
        spinner.set_message(message);
    }

    /// Stop and erase the spinner, if one is running
    pub fn clear_spinner(&self) {
        let mut guard = self.spinner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(spinner) = guard.take() {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Connecting => println!("{}...", phase.to_string().muted()),
            Phase::SelectingAssignment | Phase::SelectingFile => {
                println!("{}:", phase.to_string().emphasis());
            }
            Phase::Uploading => self.set_spinner_message("Uploading file..."),
            Phase::Submitting => self.set_spinner_message("Creating submission..."),
            Phase::Complete => self.clear_spinner(),
        }
    }

    async fn on_submitted(&self, receipt: &SubmissionReceipt) {
        self.clear_spinner();
        let body = format!(
            "{} {} {} to {}!\nPreview here: {}",
            check(),
            "Successfully submitted".success(),
            receipt.file_name.emphasis(),
            receipt.assignment.accent(),
            hyperlink_url(Stream::Stdout, &receipt.preview_url)
        );
        println!("{}", message_box(&body, BoxColor::Green, Stream::Stdout));
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
