//! Mock Canvas service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use canvas_submit::canvas::CanvasService;
use canvas_submit::error::{Error, Result};
use canvas_submit::types::{Assignment, CanvasConfig, Course, Submission, UploadedFile};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Call record for `upload_submission_file`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCall {
    pub course_id: u64,
    pub assignment_id: u64,
    pub path: PathBuf,
}

/// Call record for `create_submission`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCall {
    pub course_id: u64,
    pub assignment_id: u64,
    pub file_ids: Vec<u64>,
}

/// Simple mock Canvas service
///
/// Features:
/// - Auto-incrementing file ids
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockCanvasService {
    config: CanvasConfig,
    course: Course,
    assignments: Vec<Assignment>,
    preview_url: Mutex<Option<String>>,
    omit_preview_url: AtomicBool,
    next_file_id: AtomicU64,
    // Call tracking
    upload_calls: Mutex<Vec<UploadCall>>,
    submit_calls: Mutex<Vec<SubmitCall>>,
    // Error injection
    error_on_get_course: Mutex<Option<String>>,
    error_on_upload: Mutex<Option<String>>,
    error_on_submit: Mutex<Option<String>>,
}

impl MockCanvasService {
    /// Create a mock serving one course and its assignments
    pub fn new(course: Course, assignments: Vec<Assignment>) -> Self {
        Self {
            config: CanvasConfig {
                base_url: "https://canvas.test".to_string(),
            },
            course,
            assignments,
            preview_url: Mutex::new(None),
            omit_preview_url: AtomicBool::new(false),
            next_file_id: AtomicU64::new(900),
            upload_calls: Mutex::new(Vec::new()),
            submit_calls: Mutex::new(Vec::new()),
            error_on_get_course: Mutex::new(None),
            error_on_upload: Mutex::new(None),
            error_on_submit: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Preview URL returned by `create_submission`
    pub fn set_preview_url(&self, url: &str) {
        *self.preview_url.lock().unwrap() = Some(url.to_string());
    }

    /// Make `create_submission` answer without a preview URL
    pub fn omit_preview_url(&self) {
        self.omit_preview_url.store(true, Ordering::SeqCst);
    }

    // === Error injection methods ===

    /// Make `get_course` return an error
    pub fn fail_get_course(&self, msg: &str) {
        *self.error_on_get_course.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `upload_submission_file` return an error
    pub fn fail_upload(&self, msg: &str) {
        *self.error_on_upload.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_submission` return an error
    pub fn fail_submit(&self, msg: &str) {
        *self.error_on_submit.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `upload_submission_file` calls
    pub fn get_upload_calls(&self) -> Vec<UploadCall> {
        self.upload_calls.lock().unwrap().clone()
    }

    /// Get all `create_submission` calls
    pub fn get_submit_calls(&self) -> Vec<SubmitCall> {
        self.submit_calls.lock().unwrap().clone()
    }

    /// Assert that a file with this name was submitted to the assignment
    pub fn assert_submitted(&self, assignment_id: u64, file_name: &str) {
        let uploads = self.get_upload_calls();
        assert!(
            uploads.iter().any(|c| c.assignment_id == assignment_id
                && c.path.file_name().is_some_and(|n| n == file_name)),
            "Expected upload of {file_name} to {assignment_id} but got: {uploads:?}"
        );
        let submits = self.get_submit_calls();
        assert!(
            submits.iter().any(|c| c.assignment_id == assignment_id),
            "Expected submission to {assignment_id} but got: {submits:?}"
        );
    }
}

#[async_trait]
impl CanvasService for MockCanvasService {
    async fn get_course(&self, course_id: u64) -> Result<Course> {
        if let Some(msg) = self.error_on_get_course.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }
        if course_id == self.course.id {
            Ok(self.course.clone())
        } else {
            Err(Error::Api(format!("404 Not Found: course {course_id}")))
        }
    }

    async fn list_assignments(&self, _course_id: u64) -> Result<Vec<Assignment>> {
        Ok(self.assignments.clone())
    }

    async fn upload_submission_file(
        &self,
        course_id: u64,
        assignment_id: u64,
        path: &Path,
    ) -> Result<UploadedFile> {
        self.upload_calls.lock().unwrap().push(UploadCall {
            course_id,
            assignment_id,
            path: path.to_path_buf(),
        });

        if let Some(msg) = self.error_on_upload.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        Ok(UploadedFile {
            id: self.next_file_id.fetch_add(1, Ordering::SeqCst),
            display_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
        })
    }

    async fn create_submission(
        &self,
        course_id: u64,
        assignment_id: u64,
        file_ids: &[u64],
    ) -> Result<Submission> {
        self.submit_calls.lock().unwrap().push(SubmitCall {
            course_id,
            assignment_id,
            file_ids: file_ids.to_vec(),
        });

        if let Some(msg) = self.error_on_submit.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        let preview_url = self.preview_url.lock().unwrap().clone().unwrap_or_else(|| {
            format!(
                "https://canvas.test/courses/{course_id}/assignments/{assignment_id}/submissions/5?preview=1"
            )
        });
        let omit = self.omit_preview_url.load(Ordering::SeqCst);
        Ok(Submission {
            id: Some(5),
            preview_url: (!omit).then_some(preview_url),
        })
    }

    fn config(&self) -> &CanvasConfig {
        &self.config
    }
}
