//! Canvas API services
//!
//! Provides the interface the submission workflow needs from Canvas, and the
//! connect step that turns a course id plus token into a [`Session`].

mod client;
mod session;

pub use client::{normalize_base_url, CanvasClient};
pub use session::{connect, connect_with, Session};

use crate::error::Result;
use crate::types::{Assignment, CanvasConfig, Course, Submission, UploadedFile};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Canvas service trait for course, assignment and submission operations
///
/// This trait abstracts the Canvas REST API so that the workflow can be
/// exercised against a mock in tests.
#[async_trait]
pub trait CanvasService: Send + Sync {
    /// Fetch a course by id
    async fn get_course(&self, course_id: u64) -> Result<Course>;

    /// List every assignment in a course
    async fn list_assignments(&self, course_id: u64) -> Result<Vec<Assignment>>;

    /// Upload a local file as a submission attachment for an assignment
    async fn upload_submission_file(
        &self,
        course_id: u64,
        assignment_id: u64,
        path: &Path,
    ) -> Result<UploadedFile>;

    /// Create an `online_upload` submission referencing uploaded files
    async fn create_submission(
        &self,
        course_id: u64,
        assignment_id: u64,
        file_ids: &[u64],
    ) -> Result<Submission>;

    /// Get the service configuration
    fn config(&self) -> &CanvasConfig;
}

#[async_trait]
impl<T: CanvasService + ?Sized> CanvasService for Arc<T> {
    async fn get_course(&self, course_id: u64) -> Result<Course> {
        (**self).get_course(course_id).await
    }

    async fn list_assignments(&self, course_id: u64) -> Result<Vec<Assignment>> {
        (**self).list_assignments(course_id).await
    }

    async fn upload_submission_file(
        &self,
        course_id: u64,
        assignment_id: u64,
        path: &Path,
    ) -> Result<UploadedFile> {
        (**self)
            .upload_submission_file(course_id, assignment_id, path)
            .await
    }

    async fn create_submission(
        &self,
        course_id: u64,
        assignment_id: u64,
        file_ids: &[u64],
    ) -> Result<Submission> {
        (**self)
            .create_submission(course_id, assignment_id, file_ids)
            .await
    }

    fn config(&self) -> &CanvasConfig {
        (**self).config()
    }
}
