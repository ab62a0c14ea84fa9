//! canvas-submit - submit files to Canvas from the terminal
//!
//! CLI binary for submitting assignments and converting notebooks.

use anyhow::Result;
use canvas_submit::submit::{SubmitOptions, DEFAULT_API_URL};
use canvas_submit::types::TokenSource;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "canvas-submit")]
#[command(about = "Submit files to Canvas assignments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a file to an assignment
    Submit {
        #[command(flatten)]
        course: CourseArgs,

        /// Allowed file extension (repeatable)
        #[arg(long = "ext", default_value = "html")]
        extensions: Vec<String>,

        /// Type the assignment and file names instead of using menus
        #[arg(long)]
        no_menu: bool,

        /// Maximum width of menu entries, in characters
        #[arg(long)]
        menu_width: Option<usize>,

        /// Directory to look for files in (defaults to current directory)
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Convert a notebook with jupyter nbconvert
    Convert {
        /// Notebook to convert
        file: PathBuf,

        /// Target format (html, pdf, markdown, ...)
        #[arg(long, default_value = canvas_submit::convert::DEFAULT_FORMAT)]
        to: String,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication against a course
    Test {
        #[command(flatten)]
        course: CourseArgs,
    },
    /// Show authentication setup instructions
    Setup,
}

#[derive(Args)]
struct CourseArgs {
    /// Course id, from the course URL (e.g. 53659)
    course_id: u64,

    /// Base URL of the Canvas instance
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Use this token instead of the CANVAS_API environment variable
    #[arg(long, conflicts_with = "prompt_token")]
    token: Option<String>,

    /// Type the token on a masked prompt
    #[arg(long)]
    prompt_token: bool,
}

impl CourseArgs {
    fn token_source(&self) -> TokenSource {
        match (&self.token, self.prompt_token) {
            (Some(token), _) => TokenSource::Literal(token.clone()),
            (None, true) => TokenSource::Prompt,
            (None, false) => TokenSource::Env,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Submit {
            course,
            extensions,
            no_menu,
            menu_width,
            dir,
        } => {
            let options = SubmitOptions {
                course_id: course.course_id,
                token: course.token_source(),
                api_url: course.api_url,
                allowed_extensions: extensions,
                menu_width,
                no_menu,
                dir,
            };
            cli::run_submit(&options).await?;
        }
        Commands::Convert { file, to } => {
            cli::run_convert(&file, &to).await?;
        }
        Commands::Auth { action } => match action {
            AuthAction::Test { course } => {
                cli::run_auth_test(course.course_id, &course.api_url, &course.token_source())
                    .await?;
            }
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
