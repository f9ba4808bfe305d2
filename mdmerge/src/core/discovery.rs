// src/core/discovery.rs
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::paths;
use crate::error::{MergeError, Result};
use crate::models::DiscoveredFile;

const MARKDOWN_SUFFIX: &str = ".md";
const INDEX_FILE_NAME: &str = "readme.md";

/// Returns `true` if `name` ends with `.md`, ignoring case.
#[must_use]
pub fn is_markdown_file(name: &str) -> bool {
    name.to_lowercase().ends_with(MARKDOWN_SUFFIX)
}

/// Returns `true` if `name` is `README.md`, ignoring case.
#[must_use]
pub fn is_index_file(name: &str) -> bool {
    name.to_lowercase() == INDEX_FILE_NAME
}

/// Collects the Markdown files under `root` in merge order.
///
/// Each directory contributes its own files before any of its
/// subdirectories. Within a directory a `README.md` comes first and the
/// remaining files follow in case-insensitive name order. Subdirectories
/// are visited in name order.
///
/// # Arguments
///
/// * `root` - The resolved directory to walk
/// * `output` - The resolved output path, if any. A file resolving to the
///   same path is left out so a merge never reads its own output.
///
/// # Returns
///
/// * `Ok(Vec<DiscoveredFile>)` - The files in the order they should be merged
///
/// # Errors
///
/// This function may return an error if:
/// * A candidate file's path cannot be resolved for the output comparison
///
/// Subdirectories that cannot be listed are skipped with a warning.
pub fn collect_markdown_files(root: &Path, output: Option<&Path>) -> Result<Vec<DiscoveredFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .sort_by(listing_order)
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable path");
                continue;
            }
        };
        if !is_markdown_entry(&entry) {
            continue;
        }

        let path = entry.path();
        if let Some(output) = output {
            let resolved = paths::resolve(path).map_err(|e| MergeError::io(path, e))?;
            if resolved == output {
                debug!(path = %path.display(), "Skipping merge output");
                continue;
            }
        }

        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        debug!(path = %relative_path.display(), "Discovered Markdown file");
        files.push(DiscoveredFile {
            path: path.to_path_buf(),
            relative_path,
        });
    }

    Ok(files)
}

fn is_markdown_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    if !is_markdown_file(&entry.file_name().to_string_lossy()) {
        return false;
    }
    // Links are classified by their target.
    !(entry.path_is_symlink() && entry.path().is_dir())
}

/// Files sort before directories so each directory's own files are
/// yielded before the walker descends.
fn listing_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();

    a_is_dir.cmp(&b_is_dir).then_with(|| {
        if a_is_dir {
            a.file_name().cmp(b.file_name())
        } else {
            file_sort_key(a.file_name()).cmp(&file_sort_key(b.file_name()))
        }
    })
}

fn file_sort_key(name: &OsStr) -> (bool, String, &OsStr) {
    let lower = name.to_string_lossy().to_lowercase();
    (lower != INDEX_FILE_NAME, lower, name)
}
