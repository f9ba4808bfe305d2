// src/models.rs
use crate::error::{MergeError, Result};
use std::path::PathBuf;

/// Heading level accepted for compatibility with older callers.
pub const DEFAULT_HEADING_LEVEL: i64 = 1;

/// Delimiter accepted for compatibility with older callers.
pub const DEFAULT_DELIMITER: &str = "<<<>>>";

/// A Markdown file found under the merge root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Path of the file relative to the resolved root.
    pub relative_path: PathBuf,
}

/// Legacy formatting options.
///
/// Both fields are validated by the merger but have no effect on the
/// merged document. Earlier releases used them to insert a heading per
/// source file; they are still accepted so existing invocations keep
/// failing or succeeding the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub heading_level: i64,
    pub delimiter: String,
}

impl MergeOptions {
    #[must_use]
    pub fn new(heading_level: i64, delimiter: impl Into<String>) -> Self {
        Self {
            heading_level,
            delimiter: delimiter.into(),
        }
    }

    /// Checks the legacy options without applying them.
    ///
    /// # Errors
    ///
    /// Returns `MergeError::InvalidConfig` if the heading level is outside
    /// `1..=6` or the delimiter is empty.
    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.heading_level) {
            return Err(MergeError::InvalidConfig(format!(
                "heading_level must be between 1 and 6, got {}",
                self.heading_level
            )));
        }
        if self.delimiter.is_empty() {
            return Err(MergeError::InvalidConfig(
                "delimiter must be a non-empty string".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_LEVEL, DEFAULT_DELIMITER)
    }
}
