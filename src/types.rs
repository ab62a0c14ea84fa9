//! Core types for canvas-submit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Submission type Canvas uses for assignments accepting file uploads
pub const ONLINE_UPLOAD: &str = "online_upload";

/// A Canvas course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    /// Course id (from the course URL)
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Short course code, e.g. "DSCI 511"
    #[serde(default)]
    pub course_code: String,
}

/// A Canvas assignment as listed by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    /// Assignment id
    pub id: u64,
    /// Assignment name
    pub name: String,
    /// Accepted submission types (e.g. `online_upload`, `online_text_entry`)
    #[serde(default)]
    pub submission_types: Vec<String>,
    /// When the assignment was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Whether the assignment accepts online file uploads
    pub fn accepts_uploads(&self) -> bool {
        self.submission_types.iter().any(|t| t == ONLINE_UPLOAD)
    }
}

/// An upload-capable assignment offered for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRef {
    /// Assignment name
    pub name: String,
    /// Assignment id
    pub id: u64,
}

impl AssignmentRef {
    /// Menu label, e.g. "HW1 (101)"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssignmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

impl From<&Assignment> for AssignmentRef {
    fn from(a: &Assignment) -> Self {
        Self {
            name: a.name.clone(),
            id: a.id,
        }
    }
}

/// A local file offered for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// File name within the searched directory
    pub file_name: String,
    /// Extension without the leading dot
    pub extension: String,
    /// Full path to the file
    pub path: PathBuf,
}

impl FileRef {
    /// Path to the file on disk
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name)
    }
}

/// A file uploaded to Canvas, not yet attached to a submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    /// Canvas file id
    pub id: u64,
    /// Uploaded display name
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A submission record as returned by Canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    /// Submission id
    #[serde(default)]
    pub id: Option<u64>,
    /// Link to view the submission
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Confirmation of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Assignment the file went to
    pub assignment: AssignmentRef,
    /// File that was submitted
    pub file_name: String,
    /// Viewable confirmation URL, query string removed
    pub preview_url: String,
}

/// Source of the Canvas API token
#[derive(Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Read from the `CANVAS_API` environment variable
    Env,
    /// Token given directly
    Literal(String),
    /// Ask on a masked prompt
    Prompt,
}

impl fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "Env"),
            Self::Literal(_) => write!(f, "Literal(<redacted>)"),
            Self::Prompt => write!(f, "Prompt"),
        }
    }
}

/// Connection configuration for a Canvas instance
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Normalized base URL without trailing slash
    pub base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_assignment(types: &[&str]) -> Assignment {
        Assignment {
            id: 1,
            name: "HW".into(),
            submission_types: types.iter().map(ToString::to_string).collect(),
            created_at: None,
        }
    }

    #[test]
    fn test_accepts_uploads() {
        assert!(make_assignment(&["online_text_entry", "online_upload"]).accepts_uploads());
        assert!(!make_assignment(&["online_text_entry"]).accepts_uploads());
        assert!(!make_assignment(&[]).accepts_uploads());
    }

    #[test]
    fn test_assignment_label() {
        let r = AssignmentRef {
            name: "HW2".into(),
            id: 102,
        };
        assert_eq!(r.label(), "HW2 (102)");
        assert_eq!(r.to_string(), "HW2 (102)");
    }

    #[test]
    fn test_token_source_debug_redacts_secret() {
        let dbg = format!("{:?}", TokenSource::Literal("secret-token".into()));
        assert!(!dbg.contains("secret-token"));
    }

    #[test]
    fn test_assignment_deserializes_canvas_payload() {
        let json = r#"{
            "id": 101,
            "name": "HW1",
            "submission_types": ["online_upload"],
            "created_at": "2024-01-10T17:00:00Z",
            "points_possible": 10
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, 101);
        assert!(a.accepts_uploads());
        assert!(a.created_at.is_some());
    }
}
