// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use cli::{Args, run};
pub use crate::core::discovery::{collect_markdown_files, is_index_file, is_markdown_file};
pub use crate::core::merger::{merge_markdown_files, merge_markdown_files_with_defaults};
pub use error::{MergeError, Result};
pub use models::{DEFAULT_DELIMITER, DEFAULT_HEADING_LEVEL, DiscoveredFile, MergeOptions};
