//! Authentication for the Canvas API
//!
//! Supports tokens from the environment, given directly, or typed on a
//! masked prompt.

mod token;

pub use token::{prompt_token, resolve_token, resolve_token_with, ResolvedToken};

/// Environment variable holding the default Canvas API token
pub const TOKEN_ENV_VAR: &str = "CANVAS_API";

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the `CANVAS_API` environment variable
    EnvVar,
    /// Token passed on the command line or by the caller
    Literal,
    /// Token typed at an interactive prompt
    Prompt,
}
