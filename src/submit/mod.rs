//! Submission workflow
//!
//! Handles the workflow of submitting one file to one assignment:
//! 1. Connect - resolve the token and fetch the course
//! 2. Select - choose an assignment, then a local file
//! 3. Execute - upload the file and create the submission record

mod execute;
mod flow;
mod progress;

pub use execute::{strip_query, submit_to_assignment};
pub use flow::{FlowState, SubmissionFlow};
pub use progress::{NoopProgress, Phase, ProgressCallback};

use crate::canvas::{connect, Session};
use crate::error::Result;
use crate::select::{eligible_assignments, matching_files, MenuSelector, PromptSelector, Selector};
use crate::types::{SubmissionReceipt, TokenSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default Canvas instance
pub const DEFAULT_API_URL: &str = "https://canvas.ubc.ca/";

/// Everything needed for one submission
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    /// Course id, from the course URL
    pub course_id: u64,
    /// Base URL of the Canvas instance
    pub api_url: String,
    /// Extensions offered for submission, e.g. `["html"]`
    pub allowed_extensions: Vec<String>,
    /// Where the token comes from
    pub token: TokenSource,
    /// Label width for the interactive menus
    pub menu_width: Option<usize>,
    /// Use line-based prompts instead of menus
    pub no_menu: bool,
    /// Directory searched for files
    pub dir: PathBuf,
}

impl SubmitOptions {
    /// Options for a course with the defaults: UBC Canvas, `.html` files,
    /// token from `CANVAS_API`, interactive menus, current directory
    pub fn new(course_id: u64) -> Self {
        Self {
            course_id,
            api_url: DEFAULT_API_URL.to_string(),
            allowed_extensions: vec!["html".to_string()],
            token: TokenSource::Env,
            menu_width: None,
            no_menu: false,
            dir: PathBuf::from("."),
        }
    }
}

/// Connect, select and submit using the terminal front ends
pub async fn submit(
    options: &SubmitOptions,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReceipt> {
    progress.on_phase(Phase::Connecting).await;
    let session = connect(options.course_id, &options.api_url, &options.token, progress).await?;

    if options.no_menu {
        let mut selector = PromptSelector::stdio();
        run_submission(
            &session,
            &mut selector,
            &options.dir,
            &options.allowed_extensions,
            progress,
        )
        .await
    } else {
        let mut selector = MenuSelector::new(options.menu_width);
        run_submission(
            &session,
            &mut selector,
            &options.dir,
            &options.allowed_extensions,
            progress,
        )
        .await
    }
}

/// Run selection and submission on an established session
///
/// The assignment is chosen first, then the file. Files are listed at the
/// moment the file choice is asked for.
pub async fn run_submission(
    session: &Session,
    selector: &mut dyn Selector,
    dir: &Path,
    allowed_extensions: &[String],
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReceipt> {
    let mut flow = SubmissionFlow::new();
    let course_id = session.course.id;

    progress.on_phase(Phase::SelectingAssignment).await;
    let assignments = session.service().list_assignments(course_id).await?;
    let eligible = eligible_assignments(&assignments)?;
    debug!(
        total = assignments.len(),
        eligible = eligible.items.len(),
        "filtered assignments"
    );
    flow.choose_assignment(selector.select_assignment(&eligible)?)?;

    progress.on_phase(Phase::SelectingFile).await;
    let files = matching_files(dir, allowed_extensions)?;
    let (assignment, file) = flow.choose_file(selector.select_file(&files)?)?;

    progress
        .on_message(&format!(
            "Submitting {file} to {assignment}. Please wait, this could take a minute."
        ))
        .await;
    let outcome =
        submit_to_assignment(session.service(), course_id, &assignment, &file, progress).await;
    flow.finish(outcome)
}
