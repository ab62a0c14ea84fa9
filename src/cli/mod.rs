//! CLI commands
//!
//! Command implementations for the `canvas-submit` binary.

mod auth;
mod convert;
mod progress;
pub mod style;
mod submit;

pub use auth::{run_auth_setup, run_auth_test};
pub use convert::run_convert;
pub use submit::run_submit;
