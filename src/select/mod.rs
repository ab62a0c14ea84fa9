//! Target selection
//!
//! Two front ends implement [`Selector`]: an arrow-key menu and a line-based
//! prompt. Both choose from lists built by [`enumerate`], so the filtering and
//! validation rules are the same whichever one is used.

pub mod enumerate;
mod menu;
mod prompt;

pub use enumerate::{
    eligible_assignments, match_choice, matching_files, normalize_extensions,
    resolve_assignment, resolve_file, EligibleAssignments,
};
pub use menu::MenuSelector;
pub use prompt::PromptSelector;

use crate::error::Result;
use crate::types::{AssignmentRef, FileRef};

/// Chooses the submission targets
///
/// Callers always ask for the assignment first, then the file.
pub trait Selector {
    /// Pick one of the upload-capable assignments
    fn select_assignment(&mut self, assignments: &EligibleAssignments) -> Result<AssignmentRef>;

    /// Pick one of the matching local files
    fn select_file(&mut self, files: &[FileRef]) -> Result<FileRef>;
}
