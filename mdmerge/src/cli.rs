// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::merger::merge_markdown_files;
use crate::models::{DEFAULT_DELIMITER, DEFAULT_HEADING_LEVEL, MergeOptions};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Merge Markdown files from a directory tree into a single Markdown document.",
    long_about = None
)]
pub struct Args {
    /// Directory to search recursively for Markdown files
    pub root: PathBuf,

    /// File path where the merged Markdown document will be written
    pub output: PathBuf,

    /// Heading level (1-6). Accepted for compatibility, no longer affects the output
    #[arg(long, default_value_t = DEFAULT_HEADING_LEVEL, allow_hyphen_values = true)]
    pub heading_level: i64,

    /// Heading delimiter. Accepted for compatibility, no longer affects the output
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,
}

impl Args {
    #[must_use]
    pub fn options(&self) -> MergeOptions {
        MergeOptions::new(self.heading_level, self.delimiter.clone())
    }
}

/// Runs a merge from parsed arguments and prints where the result went.
///
/// # Errors
///
/// Returns an error if the merge fails; see
/// [`merge_markdown_files`](crate::merge_markdown_files).
pub fn run(args: Args) -> Result<PathBuf> {
    let output = merge_markdown_files(&args.root, &args.output, &args.options())
        .with_context(|| format!("Failed to merge Markdown files under {}", args.root.display()))?;
    println!("Merged Markdown written to {}", output.display());
    Ok(output)
}
