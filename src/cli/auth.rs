//! Auth command - test and explain token setup

use crate::cli::progress::CliProgress;
use crate::cli::style::{bullet, check, Stylize};
use crate::cli::submit::flag_hint;
use anstream::{eprintln, println};
use canvas_submit::auth::TOKEN_ENV_VAR;
use canvas_submit::canvas::connect;
use canvas_submit::error::Result;
use canvas_submit::types::TokenSource;

/// Run the auth test command: connect to a course and report it
pub async fn run_auth_test(course_id: u64, api_url: &str, token: &TokenSource) -> Result<()> {
    println!("Testing Canvas authentication...");
    let progress = CliProgress::new();
    let session = match connect(course_id, api_url, token, &progress).await {
        Ok(session) => session,
        Err(err) => {
            if let Some(hint) = flag_hint(&err) {
                eprintln!("{}", hint.muted());
            }
            return Err(err);
        }
    };

    println!(
        "{} Connected to {} ({})",
        check(),
        session.course.name.accent(),
        session.course.course_code.muted()
    );
    println!("Token source: {:?}", session.source);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "Canvas Authentication Setup".emphasis());
    println!("===========================");
    println!();
    println!("Create a token in Canvas:");
    println!("  {} Account > Settings > Approved Integrations", bullet());
    println!("  {} Click \"+ New Access Token\" and copy the token", bullet());
    println!();
    println!("Option 1: Environment variable (recommended)");
    println!("  Set {}", TOKEN_ENV_VAR.accent());
    println!();
    println!("Option 2: Enter it when asked");
    println!("  Run: {}", "canvas-submit submit <course> --prompt-token".accent());
    println!();
    println!(
        "{}",
        "Tokens belonging to an instructor or TA cannot submit assignments.".muted()
    );
}
