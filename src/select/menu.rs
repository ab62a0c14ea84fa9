//! Interactive arrow-key selection

use crate::error::Result;
use crate::select::enumerate::{truncate_label, EligibleAssignments};
use crate::select::Selector;
use crate::types::{AssignmentRef, FileRef};
use dialoguer::Select;

/// Selector showing keyboard-navigable menus on the terminal
#[derive(Debug, Clone, Default)]
pub struct MenuSelector {
    /// Maximum label width in characters; longer labels are cut
    pub width: Option<usize>,
}

impl MenuSelector {
    /// Create a menu selector with an optional label width
    pub const fn new(width: Option<usize>) -> Self {
        Self { width }
    }

    fn pick(&self, prompt: &str, labels: &[String], default: usize) -> Result<usize> {
        let items: Vec<String> = labels
            .iter()
            .map(|l| truncate_label(l, self.width))
            .collect();
        let index = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(default)
            .interact()?;
        Ok(index)
    }
}

impl Selector for MenuSelector {
    fn select_assignment(&mut self, assignments: &EligibleAssignments) -> Result<AssignmentRef> {
        let index = self.pick(
            "Select assignment to submit to",
            &assignments.labels(),
            assignments.default_index,
        )?;
        Ok(assignments.items[index].clone())
    }

    fn select_file(&mut self, files: &[FileRef]) -> Result<FileRef> {
        let labels: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();
        let index = self.pick("Select a file to submit", &labels, 0)?;
        Ok(files[index].clone())
    }
}
