//! Convert command - run nbconvert on a notebook

use crate::cli::style::{arrow, check, cross, Stylize};
use anstream::{eprintln, println};
use canvas_submit::convert::convert_notebook;
use canvas_submit::error::Result;
use std::path::Path;

/// Run the convert command
pub async fn run_convert(file: &Path, to_format: &str) -> Result<()> {
    println!(
        "{} Converting {} to {}...",
        arrow(),
        file.display().accent(),
        to_format.accent()
    );

    match convert_notebook(file, to_format).await {
        Ok(output) => {
            println!("{} Wrote {}", check(), output.display().emphasis());
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", cross(), "Conversion failed".error());
            Err(err)
        }
    }
}
