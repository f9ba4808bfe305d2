// src/core/merger.rs
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::discovery::collect_markdown_files;
use crate::core::paths;
use crate::error::{MergeError, Result};
use crate::models::{DiscoveredFile, MergeOptions};

const SECTION_SEPARATOR: &[u8] = b"\n\n";

/// Merges the Markdown files under `root` into a single document at `output`.
///
/// Files are concatenated in discovery order. Trailing newlines of each
/// file are stripped, consecutive files are separated by a blank line and
/// the document ends with a single newline. An empty tree produces an
/// empty file. The output is overwritten on every run.
///
/// Line endings are read the way a text reader sees them: `\r\n` and a
/// lone `\r` both become `\n` before trailing newlines are stripped.
///
/// `options` is validated but does not change the output. Options are
/// checked before `root`, so when both are invalid the configuration
/// error is returned.
///
/// # Arguments
///
/// * `root` - Directory to search for Markdown files
/// * `output` - File path where the merged document will be written
/// * `options` - Legacy heading level and delimiter
///
/// # Returns
///
/// * `Ok(PathBuf)` - The resolved path of the written document
///
/// # Errors
///
/// This function may return an error if:
/// * The heading level is outside `1..=6` or the delimiter is empty
/// * `root` does not exist or is not a directory
/// * The output directory cannot be created or the output file cannot be written
/// * A Markdown file cannot be read as UTF-8 text; files already written stay on disk
pub fn merge_markdown_files(
    root: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &MergeOptions,
) -> Result<PathBuf> {
    options.validate()?;

    let root = root.as_ref();
    let root_path = paths::resolve(root)
        .ok()
        .filter(|path| path.is_dir())
        .ok_or_else(|| MergeError::InvalidRoot(root.to_path_buf()))?;

    let output = output.as_ref();
    let output_path = paths::resolve(output).map_err(|e| MergeError::io(output, e))?;

    info!(
        root = %root_path.display(),
        output = %output_path.display(),
        "Merging Markdown files"
    );

    let files = collect_markdown_files(&root_path, Some(&output_path))?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| MergeError::io(parent, e))?;
    }

    let file = File::create(&output_path).map_err(|e| MergeError::io(&output_path, e))?;
    let mut writer = BufWriter::new(file);
    write_merged(&mut writer, &files, &output_path)?;
    writer
        .flush()
        .map_err(|e| MergeError::io(&output_path, e))?;

    info!(
        files = files.len(),
        output = %output_path.display(),
        "Merged Markdown written"
    );
    Ok(output_path)
}

/// [`merge_markdown_files`] with the default legacy options.
///
/// # Errors
///
/// See [`merge_markdown_files`].
pub fn merge_markdown_files_with_defaults(
    root: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<PathBuf> {
    merge_markdown_files(root, output, &MergeOptions::default())
}

fn write_merged<W: Write>(
    writer: &mut W,
    files: &[DiscoveredFile],
    output_path: &Path,
) -> Result<()> {
    let write_err = |e: std::io::Error| MergeError::io(output_path, e);

    for (index, file) in files.iter().enumerate() {
        if index > 0 {
            writer.write_all(SECTION_SEPARATOR).map_err(write_err)?;
        }

        let content = fs::read_to_string(&file.path).map_err(|e| MergeError::io(&file.path, e))?;
        let content = normalize_line_endings(&content);
        writer
            .write_all(content.trim_end_matches('\n').as_bytes())
            .map_err(write_err)?;
        debug!(path = %file.relative_path.display(), "Merged file");
    }

    if !files.is_empty() {
        writer.write_all(b"\n").map_err(write_err)?;
    }

    Ok(())
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}
