//! Line-based selection: print the options, read one line, match it

use crate::error::Result;
use crate::select::enumerate::{resolve_assignment, resolve_file, EligibleAssignments};
use crate::select::Selector;
use crate::types::{AssignmentRef, FileRef};
use std::io::{self, BufRead, Write};

/// Selector reading typed answers from `input` and writing prompts to `output`
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl PromptSelector<io::StdinLock<'static>, io::Stdout> {
    /// Prompt selector on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    /// Create a selector over arbitrary streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Selector for PromptSelector<R, W> {
    fn select_assignment(&mut self, assignments: &EligibleAssignments) -> Result<AssignmentRef> {
        writeln!(self.output, "Assignments accepting file uploads:")?;
        for assignment in &assignments.items {
            writeln!(self.output, "  {assignment}")?;
        }
        write!(self.output, "Type the name of the assignment to submit to: ")?;
        let answer = self.read_answer()?;
        resolve_assignment(&answer, assignments)
    }

    fn select_file(&mut self, files: &[FileRef]) -> Result<FileRef> {
        writeln!(self.output, "Files available to submit:")?;
        for file in files {
            writeln!(self.output, "  {file}")?;
        }
        write!(self.output, "Type the name of the file to submit: ")?;
        let answer = self.read_answer()?;
        resolve_file(&answer, files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    fn eligible() -> EligibleAssignments {
        EligibleAssignments {
            items: vec![
                AssignmentRef {
                    name: "HW1".into(),
                    id: 101,
                },
                AssignmentRef {
                    name: "HW2".into(),
                    id: 102,
                },
            ],
            default_index: 1,
        }
    }

    #[test]
    fn test_prompt_lists_and_matches_assignment() {
        let mut selector = PromptSelector::new(Cursor::new("hw2\n"), Vec::new());
        let chosen = selector.select_assignment(&eligible()).unwrap();
        assert_eq!(chosen.id, 102);

        let out = String::from_utf8(selector.into_output()).unwrap();
        assert!(out.contains("HW1 (101)"));
        assert!(out.contains("HW2 (102)"));
    }

    #[test]
    fn test_prompt_rejects_unknown_assignment() {
        let mut selector = PromptSelector::new(Cursor::new("HW9\n"), Vec::new());
        let err = selector.select_assignment(&eligible()).unwrap_err();
        assert!(matches!(err, Error::Selection { .. }));
    }

    #[test]
    fn test_prompt_empty_input_is_rejected() {
        let mut selector = PromptSelector::new(Cursor::new(""), Vec::new());
        assert!(selector.select_assignment(&eligible()).is_err());
    }

    #[test]
    fn test_prompt_matches_file() {
        let files = vec![FileRef {
            file_name: "report.html".into(),
            extension: "html".into(),
            path: "report.html".into(),
        }];
        let mut selector = PromptSelector::new(Cursor::new("Report.HTML\n"), Vec::new());
        assert_eq!(
            selector.select_file(&files).unwrap().file_name,
            "report.html"
        );
    }
}
