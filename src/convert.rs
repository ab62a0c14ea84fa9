//! Notebook conversion through `jupyter nbconvert`

use crate::error::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Default target format
pub const DEFAULT_FORMAT: &str = "html";

/// Convert a notebook with `jupyter nbconvert --to <format>`
///
/// Returns the path nbconvert writes to, next to the input file. A non-zero
/// exit becomes [`Error::Conversion`] carrying the converter's stderr.
pub async fn convert_notebook(file_name: &Path, to_format: &str) -> Result<PathBuf> {
    if !file_name.is_file() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("notebook not found: {}", file_name.display()),
        )));
    }

    debug!(file = %file_name.display(), format = to_format, "running nbconvert");
    let output = Command::new("jupyter")
        .arg("nbconvert")
        .arg("--to")
        .arg(to_format)
        .arg(file_name)
        .output()
        .await?;

    if !output.status.success() {
        return Err(Error::Conversion {
            file: file_name.display().to_string(),
            format: to_format.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(converted_path(file_name, to_format))
}

/// Where nbconvert writes its output for a given format
pub fn converted_path(file_name: &Path, to_format: &str) -> PathBuf {
    let extension = match to_format {
        "markdown" => "md",
        "script" | "python" => "py",
        "latex" => "tex",
        "notebook" => "nbconvert.ipynb",
        "webpdf" => "pdf",
        "asciidoc" => "asciidoc",
        other => other,
    };
    file_name.with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_path() {
        assert_eq!(
            converted_path(Path::new("lab1.ipynb"), "html"),
            PathBuf::from("lab1.html")
        );
        assert_eq!(
            converted_path(Path::new("work/lab1.ipynb"), "markdown"),
            PathBuf::from("work/lab1.md")
        );
        assert_eq!(
            converted_path(Path::new("lab1.ipynb"), "notebook"),
            PathBuf::from("lab1.nbconvert.ipynb")
        );
        assert_eq!(
            converted_path(Path::new("lab1.ipynb"), "script"),
            PathBuf::from("lab1.py")
        );
    }

    #[tokio::test]
    async fn test_missing_notebook_is_not_found() {
        let err = convert_notebook(Path::new("definitely-missing.ipynb"), "html")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }
}
