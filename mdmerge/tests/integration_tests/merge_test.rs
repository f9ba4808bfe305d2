// tests/integration_tests/merge_test.rs
use super::common::{create_test_file, expected_tree_output, setup_test_directory};
use anyhow::Result;
use mdmerge::{MergeError, MergeOptions, merge_markdown_files, merge_markdown_files_with_defaults};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_merge_tree() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let out_dir = TempDir::new()?;
    let output = out_dir.path().join("merged.md");

    let written = merge_markdown_files_with_defaults(temp_dir.path(), &output)?;
    assert!(written.is_absolute());
    assert_eq!(fs::read_to_string(&written)?, expected_tree_output());

    Ok(())
}

#[test]
fn test_merge_is_idempotent() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let output = temp_dir.path().join("build/merged.md");

    merge_markdown_files_with_defaults(temp_dir.path(), &output)?;
    let first = fs::read(&output)?;
    merge_markdown_files_with_defaults(temp_dir.path(), &output)?;
    let second = fs::read(&output)?;

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first)?, expected_tree_output());

    Ok(())
}

#[test]
fn test_hello_world_example() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "docs/1.md", "Hello\n\n\n")?;
    create_test_file(temp_dir.path(), "docs/2.md", "World")?;
    let output = temp_dir.path().join("merged.md");

    merge_markdown_files_with_defaults(temp_dir.path().join("docs"), &output)?;
    assert_eq!(fs::read_to_string(&output)?, "Hello\n\nWorld\n");

    Ok(())
}

#[test]
fn test_merge_overwrites_previous_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "docs/page.md", "Fresh")?;
    let output = create_test_file(
        temp_dir.path(),
        "merged.md",
        "A much longer previous document that must disappear",
    )?;

    merge_markdown_files_with_defaults(temp_dir.path().join("docs"), &output)?;
    assert_eq!(fs::read_to_string(&output)?, "Fresh\n");

    Ok(())
}

#[test]
fn test_non_markdown_tree_gives_empty_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "src/main.rs", "fn main() {}")?;
    create_test_file(temp_dir.path(), "src/notes.markdown", "# Not matched")?;
    create_test_file(temp_dir.path(), "src/img/photo.png", "png")?;
    let output = temp_dir.path().join("out/merged.md");

    let written = merge_markdown_files_with_defaults(temp_dir.path().join("src"), &output)?;
    assert!(written.is_file());
    assert_eq!(fs::metadata(&written)?.len(), 0);

    Ok(())
}

#[test]
fn test_heading_level_boundaries() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let out_dir = TempDir::new()?;
    let output = out_dir.path().join("merged.md");

    for level in [1, 6] {
        merge_markdown_files(temp_dir.path(), &output, &MergeOptions::new(level, "<<<>>>"))?;
        assert_eq!(fs::read_to_string(&output)?, expected_tree_output());
    }

    for level in [0, 7] {
        let result = merge_markdown_files(temp_dir.path(), &output, &MergeOptions::new(level, "<<<>>>"));
        assert!(
            matches!(result, Err(MergeError::InvalidConfig(_))),
            "heading level {level} should be rejected"
        );
    }

    Ok(())
}

#[test]
fn test_delimiter_validation() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let out_dir = TempDir::new()?;
    let output = out_dir.path().join("merged.md");

    let result = merge_markdown_files(temp_dir.path(), &output, &MergeOptions::new(1, ""));
    assert!(matches!(result, Err(MergeError::InvalidConfig(_))));
    assert!(!output.exists(), "Rejected runs must not create the output");

    merge_markdown_files(temp_dir.path(), &output, &MergeOptions::new(1, "   "))?;
    assert_eq!(fs::read_to_string(&output)?, expected_tree_output());

    Ok(())
}

#[test]
fn test_root_is_a_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "single.md", "Single")?;
    let output = temp_dir.path().join("merged.md");

    let result = merge_markdown_files_with_defaults(&file, &output);
    assert!(matches!(result, Err(MergeError::InvalidRoot(_))));
    assert!(!output.exists());

    Ok(())
}
