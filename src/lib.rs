//! canvas-submit - submit files to Canvas assignments
//!
//! Library behind the `canvas-submit` binary. The workflow runs in three steps:
//! 1. Resolve credentials and connect to a course ([`canvas::connect`])
//! 2. Select an assignment and a local file ([`select`])
//! 3. Upload and submit ([`submit`])
//!
//! Notebook conversion via `jupyter nbconvert` lives in [`convert`].

pub mod auth;
pub mod canvas;
pub mod convert;
pub mod error;
pub mod select;
pub mod submit;
pub mod types;

pub use convert::convert_notebook;
pub use error::{Error, Result};
pub use submit::{submit, SubmitOptions};
