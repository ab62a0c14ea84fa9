//! Connecting to a course
//!
//! Resolves the token, builds the client and fetches the course once.

use crate::auth::{resolve_token, AuthSource};
use crate::canvas::{CanvasClient, CanvasService};
use crate::error::{Error, Result};
use crate::submit::ProgressCallback;
use crate::types::{Course, TokenSource};
use tracing::{debug, info};

const ENV_TOKEN_HINT: &str = "I found a token but could not access the given Canvas course. \
Perhaps you entered the wrong course code? Or your token is invalid? \
You can also try entering your token interactively.";

const TYPED_TOKEN_HINT: &str = "You entered a token but I still could not access the given \
Canvas course. Perhaps you entered the wrong course code? Or your token is invalid?";

/// A connected course
pub struct Session {
    /// The course fetched at connect time
    pub course: Course,
    /// Where the token came from
    pub source: AuthSource,
    service: Box<dyn CanvasService>,
}

impl Session {
    /// The service the session talks through
    pub fn service(&self) -> &dyn CanvasService {
        self.service.as_ref()
    }
}

/// Connect to a course on a Canvas instance
///
/// The token is resolved from `token` first; a missing environment token fails
/// before any network call.
pub async fn connect(
    course_id: u64,
    api_url: &str,
    token: &TokenSource,
    progress: &dyn ProgressCallback,
) -> Result<Session> {
    let resolved = resolve_token(token)?;
    if resolved.source == AuthSource::Prompt {
        progress.on_message("Token successfully entered - thanks!").await;
    }

    let client = match CanvasClient::new(api_url, resolved.token) {
        Ok(client) => client,
        Err(e) => return Err(connection_failed(course_id, resolved.source, &e, progress).await),
    };
    connect_with(Box::new(client), course_id, resolved.source, progress).await
}

/// Connect using an existing service
pub async fn connect_with(
    service: Box<dyn CanvasService>,
    course_id: u64,
    source: AuthSource,
    progress: &dyn ProgressCallback,
) -> Result<Session> {
    debug!(course_id, base_url = %service.config().base_url, ?source, "connecting");

    match service.get_course(course_id).await {
        Ok(course) => {
            info!(course_id, name = %course.name, "connected to course");
            Ok(Session {
                course,
                source,
                service,
            })
        }
        Err(e) => Err(connection_failed(course_id, source, &e, progress).await),
    }
}

/// Print the hint for the token source and wrap the failure
async fn connection_failed(
    course_id: u64,
    source: AuthSource,
    cause: &Error,
    progress: &dyn ProgressCallback,
) -> Error {
    let hint = match source {
        AuthSource::Prompt => TYPED_TOKEN_HINT,
        AuthSource::EnvVar | AuthSource::Literal => ENV_TOKEN_HINT,
    };
    progress.on_message(hint).await;
    Error::Connection {
        course_id,
        detail: cause.to_string(),
    }
}
