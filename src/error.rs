//! Error types for canvas-submit

use crate::auth::TOKEN_ENV_VAR;
use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// What a selection error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// An assignment name
    Assignment,
    /// A local file name
    File,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment => write!(f, "assignment"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Errors surfaced by the submission workflow
#[derive(Debug, Error)]
pub enum Error {
    /// Token was requested from the environment but is not set
    #[error("could not find a token '{var}' in your environment variables")]
    MissingToken {
        /// Name of the expected environment variable
        var: &'static str,
    },

    /// Course could not be reached with the given token
    #[error("could not access course {course_id}: {detail}")]
    Connection {
        /// Course id that was requested
        course_id: u64,
        /// Underlying failure
        detail: String,
    },

    /// User input matched none of the enumerated options
    #[error("no {kind} named '{input}'; valid options are: {}", .options.join(", "))]
    Selection {
        /// What was being selected
        kind: SelectionKind,
        /// What the user typed
        input: String,
        /// Every valid option, once each
        options: Vec<String>,
    },

    /// Course has no assignment accepting file uploads
    #[error("no assignment in this course accepts online file uploads")]
    NoUploadableAssignments,

    /// No local file matches the allowed extensions
    #[error("no files found with the expected extensions: {}", format_extensions(.extensions))]
    NoMatchingFiles {
        /// Allowed extensions that were searched for
        extensions: Vec<String>,
    },

    /// Upload or submission record creation failed
    #[error(
        "could not submit your assignment: {detail} (note: tokens belonging to an instructor or TA role cannot submit assignments)"
    )]
    Submission {
        /// Underlying failure
        detail: String,
    },

    /// External converter exited non-zero
    #[error("failed to convert {file} to {format}: {stderr}")]
    Conversion {
        /// Input notebook
        file: String,
        /// Requested target format
        format: String,
        /// Captured standard error of the converter
        stderr: String,
    },

    /// Workflow step requested out of order
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        /// Requested step
        action: &'static str,
        /// Current state of the workflow
        state: String,
    },

    /// Canvas API answered with an unexpected payload
    #[error("Canvas API error: {0}")]
    Api(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid base URL
    #[error("invalid Canvas URL: {0}")]
    Url(#[from] url::ParseError),

    /// Interactive prompt failed
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Missing-token error for the default environment variable
    pub const fn missing_token() -> Self {
        Self::MissingToken { var: TOKEN_ENV_VAR }
    }
}

fn format_extensions(extensions: &[String]) -> String {
    if extensions.is_empty() {
        "(none)".to_string()
    } else {
        extensions
            .iter()
            .map(|e| format!(".{e}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_names_variable() {
        let msg = Error::missing_token().to_string();
        assert!(msg.contains("CANVAS_API"));
        assert!(!msg.contains("--"), "library message names no CLI flags: {msg}");
    }

    #[test]
    fn test_selection_lists_options() {
        let err = Error::Selection {
            kind: SelectionKind::Assignment,
            input: "hw3".into(),
            options: vec!["HW1".into(), "HW2".into()],
        };
        assert_eq!(
            err.to_string(),
            "no assignment named 'hw3'; valid options are: HW1, HW2"
        );
    }

    #[test]
    fn test_no_matching_files_lists_extensions() {
        let err = Error::NoMatchingFiles {
            extensions: vec!["csv".into(), "ipynb".into()],
        };
        assert_eq!(
            err.to_string(),
            "no files found with the expected extensions: .csv, .ipynb"
        );
    }

    #[test]
    fn test_no_matching_files_empty_allow_list() {
        let err = Error::NoMatchingFiles { extensions: vec![] };
        assert!(err.to_string().ends_with("(none)"));
    }

    #[test]
    fn test_submission_carries_instructor_hint() {
        let err = Error::Submission {
            detail: "403 Forbidden".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403 Forbidden"));
        assert!(msg.contains("instructor"));
    }
}
