//! Submit command - submit one file to one assignment

use crate::cli::progress::CliProgress;
use crate::cli::style::{message_box, BoxColor, Stream, Stylize};
use anstream::eprintln;
use canvas_submit::error::{Error, Result};
use canvas_submit::submit::{submit, SubmitOptions};

/// Run the submit command
pub async fn run_submit(options: &SubmitOptions) -> Result<()> {
    let progress = CliProgress::new();

    match submit(options, &progress).await {
        Ok(_) => Ok(()),
        Err(err) => {
            progress.clear_spinner();
            report_failure(&err);
            Err(err)
        }
    }
}

fn report_failure(err: &Error) {
    let headline = match err {
        Error::Submission { .. } => {
            "Something went wrong and I could not submit your assignment. The error was:"
        }
        Error::MissingToken { .. } | Error::Connection { .. } => "Could not connect to Canvas:",
        Error::NoUploadableAssignments | Error::NoMatchingFiles { .. } => {
            "Nothing to submit:"
        }
        Error::Selection { .. } => "Selection not recognized:",
        _ => "Submission failed:",
    };
    let mut body = format!("{headline}\n{}", err.to_string().warn());
    if let Some(hint) = flag_hint(err) {
        body.push('\n');
        body.push_str(hint);
    }
    eprintln!("{}", message_box(&body, BoxColor::Red, Stream::Stderr));
}

/// CLI flag that gets the user past `err`, if any
pub(crate) const fn flag_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::MissingToken { .. } => {
            Some("Set it, or pass --prompt-token to enter your token interactively.")
        }
        _ => None,
    }
}
