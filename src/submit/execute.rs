//! Upload and submit
//!
//! Uploads the chosen file, then creates the submission record that points
//! at it. Either both steps succeed or the whole submission is reported failed.

use crate::canvas::CanvasService;
use crate::error::{Error, Result};
use crate::submit::{Phase, ProgressCallback};
use crate::types::{AssignmentRef, FileRef, SubmissionReceipt};
use tracing::{debug, info, warn};

/// Upload `file` and submit it to `assignment`
///
/// Any failure in either step becomes [`Error::Submission`]. A file uploaded
/// before a failed record creation is left as is on the Canvas side.
pub async fn submit_to_assignment(
    service: &dyn CanvasService,
    course_id: u64,
    assignment: &AssignmentRef,
    file: &FileRef,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReceipt> {
    progress.on_phase(Phase::Uploading).await;
    let uploaded = service
        .upload_submission_file(course_id, assignment.id, file.path())
        .await
        .map_err(into_submission_error)?;
    debug!(file_id = uploaded.id, "upload complete");

    progress.on_phase(Phase::Submitting).await;
    let submission = service
        .create_submission(course_id, assignment.id, &[uploaded.id])
        .await
        .map_err(into_submission_error)?;

    // The record exists at this point, so a missing link is not a failure
    let preview_url = submission.preview_url.map_or_else(
        || {
            warn!(assignment_id = assignment.id, "no preview link returned");
            assignment_page_url(&service.config().base_url, course_id, assignment.id)
        },
        |url| strip_query(&url),
    );

    let receipt = SubmissionReceipt {
        assignment: assignment.clone(),
        file_name: file.file_name.clone(),
        preview_url,
    };
    info!(assignment_id = assignment.id, file = %file.file_name, "submitted");

    progress.on_submitted(&receipt).await;
    progress.on_phase(Phase::Complete).await;
    Ok(receipt)
}

fn into_submission_error(err: Error) -> Error {
    match err {
        Error::Submission { .. } => err,
        other => Error::Submission {
            detail: other.to_string(),
        },
    }
}

/// Drop the query string from a confirmation URL
pub fn strip_query(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_string()
}

/// Assignment page, where Canvas lists the student's submission
fn assignment_page_url(base_url: &str, course_id: u64, assignment_id: u64) -> String {
    format!(
        "{}/courses/{course_id}/assignments/{assignment_id}",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_query() {
        assert_eq!(
            strip_query("https://canvas.test/courses/1/assignments/2/submissions/5?preview=1"),
            "https://canvas.test/courses/1/assignments/2/submissions/5"
        );
        assert_eq!(
            strip_query("https://canvas.test/submissions/5?preview=1&version=2"),
            "https://canvas.test/submissions/5"
        );
        assert_eq!(
            strip_query("https://canvas.test/submissions/5"),
            "https://canvas.test/submissions/5"
        );
    }

    #[test]
    fn test_strip_query_keeps_fragment_without_query() {
        assert_eq!(
            strip_query("https://canvas.test/submissions/5#comments"),
            "https://canvas.test/submissions/5#comments"
        );
    }

    #[test]
    fn test_assignment_page_url() {
        assert_eq!(
            assignment_page_url("https://canvas.test/", 1, 2),
            "https://canvas.test/courses/1/assignments/2"
        );
    }

    #[test]
    fn test_into_submission_error_wraps_once() {
        let wrapped = into_submission_error(Error::Api("boom".into()));
        let msg = wrapped.to_string();
        let again = into_submission_error(wrapped);
        assert_eq!(again.to_string(), msg);
        assert!(msg.contains("boom"));
    }
}
