//! Token resolution

use crate::auth::{AuthSource, TOKEN_ENV_VAR};
use crate::error::{Error, Result};
use crate::types::TokenSource;
use dialoguer::Password;
use std::env;
use std::fmt;

/// A Canvas token together with where it came from
#[derive(Clone)]
pub struct ResolvedToken {
    /// The secret itself
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

impl fmt::Debug for ResolvedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedToken")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve a token, prompting on the terminal for [`TokenSource::Prompt`]
pub fn resolve_token(source: &TokenSource) -> Result<ResolvedToken> {
    resolve_token_with(source, prompt_token)
}

/// Resolve a token with a custom prompt function
///
/// Priority is fixed by the source: the environment variable is read only for
/// [`TokenSource::Env`], the prompt is only invoked for [`TokenSource::Prompt`].
pub fn resolve_token_with<F>(source: &TokenSource, prompt: F) -> Result<ResolvedToken>
where
    F: FnOnce() -> Result<String>,
{
    match source {
        TokenSource::Env => match env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(ResolvedToken {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            }),
            _ => Err(Error::missing_token()),
        },
        TokenSource::Literal(token) => Ok(ResolvedToken {
            token: token.trim().to_string(),
            source: AuthSource::Literal,
        }),
        TokenSource::Prompt => {
            let token = prompt()?;
            Ok(ResolvedToken {
                token: token.trim().to_string(),
                source: AuthSource::Prompt,
            })
        }
    }
}

/// Ask for a token on a masked input line
pub fn prompt_token() -> Result<String> {
    let token = Password::new()
        .with_prompt("Please paste your Canvas token here and then hit enter")
        .interact()?;
    Ok(token)
}
