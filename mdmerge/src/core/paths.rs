// src/core/paths.rs
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Replaces a leading `~` component with the current user's home directory.
///
/// Only the bare `~` form is expanded. `~user` prefixes, paths that do not
/// start with `~`, and hosts without `HOME` are returned unchanged.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == OsStr::new("~") => {
            let Some(home) = env::var_os("HOME") else {
                return path.to_path_buf();
            };
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                PathBuf::from(home)
            } else {
                PathBuf::from(home).join(rest)
            }
        }
        _ => path.to_path_buf(),
    }
}

/// Resolves `path` to an absolute, symlink-free form.
///
/// The path does not have to exist. The longest existing ancestor is
/// canonicalized and the missing remainder is appended with `.` and `..`
/// collapsed lexically.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or the
/// path is empty.
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(expand_home(path))?;
    if let Ok(canonical) = fs::canonicalize(&absolute) {
        return Ok(canonical);
    }

    for ancestor in absolute.ancestors().skip(1) {
        let Ok(canonical) = fs::canonicalize(ancestor) else {
            continue;
        };
        let Ok(rest) = absolute.strip_prefix(ancestor) else {
            continue;
        };
        return Ok(normalize_lexically(&canonical.join(rest)));
    }

    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
