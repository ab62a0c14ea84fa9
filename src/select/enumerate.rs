//! Enumeration, filtering and matching shared by every selector

use crate::error::{Error, Result, SelectionKind};
use crate::types::{Assignment, AssignmentRef, FileRef};
use std::path::Path;

/// Upload-capable assignments plus the one to pre-select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleAssignments {
    /// Assignments accepting file uploads, in course order
    pub items: Vec<AssignmentRef>,
    /// Index of the most recently created assignment
    pub default_index: usize,
}

impl EligibleAssignments {
    /// Menu labels, e.g. "HW1 (101)"
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(AssignmentRef::label).collect()
    }

    /// The pre-selected assignment
    pub fn default_assignment(&self) -> &AssignmentRef {
        &self.items[self.default_index]
    }
}

/// Keep only assignments accepting online uploads
///
/// Errors with [`Error::NoUploadableAssignments`] rather than returning an
/// empty list.
pub fn eligible_assignments(assignments: &[Assignment]) -> Result<EligibleAssignments> {
    let eligible: Vec<&Assignment> = assignments.iter().filter(|a| a.accepts_uploads()).collect();

    // Newest by creation time; assignments without a timestamp count as oldest,
    // ties go to the higher id.
    let default_index = eligible
        .iter()
        .enumerate()
        .max_by_key(|(_, a)| (a.created_at, a.id))
        .map(|(i, _)| i)
        .ok_or(Error::NoUploadableAssignments)?;

    Ok(EligibleAssignments {
        items: eligible.into_iter().map(AssignmentRef::from).collect(),
        default_index,
    })
}

/// Normalize an allow-list: lowercase, no leading dot, no blanks, no repeats
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for ext in extensions {
        let ext = ext.trim().trim_start_matches('.').to_lowercase();
        if !ext.is_empty() && !normalized.contains(&ext) {
            normalized.push(ext);
        }
    }
    normalized
}

/// List files in `dir` whose extension is in the allow-list
///
/// The directory is read on every call. Errors with
/// [`Error::NoMatchingFiles`] when nothing matches, including when the
/// allow-list is empty.
pub fn matching_files(dir: &Path, extensions: &[String]) -> Result<Vec<FileRef>> {
    let allowed = normalize_extensions(extensions);
    let mut files = Vec::new();

    if !allowed.is_empty() {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let Some(extension) = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase)
            else {
                continue;
            };
            if !allowed.contains(&extension) {
                continue;
            }
            files.push(FileRef {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                extension,
                path,
            });
        }
    }

    if files.is_empty() {
        return Err(Error::NoMatchingFiles {
            extensions: allowed,
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// Index of the first option equal to `input`, ignoring case and surrounding whitespace
pub fn match_choice<S: AsRef<str>>(input: &str, options: &[S]) -> Option<usize> {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    options
        .iter()
        .position(|o| o.as_ref().trim().to_lowercase() == wanted)
}

/// Options with repeats removed, first occurrence kept
pub fn unique_options<I, S>(options: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen: Vec<String> = Vec::new();
    for option in options {
        let option = option.into();
        if !seen.contains(&option) {
            seen.push(option);
        }
    }
    seen
}

/// Resolve typed input to an assignment
///
/// Accepts the full label (`"HW2 (102)"`) or the bare name when it is
/// unambiguous.
pub fn resolve_assignment(input: &str, eligible: &EligibleAssignments) -> Result<AssignmentRef> {
    let labels = eligible.labels();
    if let Some(i) = match_choice(input, &labels) {
        return Ok(eligible.items[i].clone());
    }

    let wanted = input.trim().to_lowercase();
    let mut by_name = eligible
        .items
        .iter()
        .filter(|a| !wanted.is_empty() && a.name.trim().to_lowercase() == wanted);
    match (by_name.next(), by_name.next()) {
        (Some(found), None) => Ok(found.clone()),
        _ => Err(Error::Selection {
            kind: SelectionKind::Assignment,
            input: input.trim().to_string(),
            options: unique_options(labels),
        }),
    }
}

/// Resolve typed input to one of the listed files
pub fn resolve_file(input: &str, files: &[FileRef]) -> Result<FileRef> {
    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    match_choice(input, &names)
        .map(|i| files[i].clone())
        .ok_or_else(|| Error::Selection {
            kind: SelectionKind::File,
            input: input.trim().to_string(),
            options: unique_options(names),
        })
}

/// Shorten a label to `width` characters, marking the cut with "..."
pub fn truncate_label(label: &str, width: Option<usize>) -> String {
    match width {
        Some(max) if max > 3 && label.chars().count() > max => {
            format!("{}...", label.chars().take(max - 3).collect::<String>())
        }
        _ => label.to_string(),
    }
}
