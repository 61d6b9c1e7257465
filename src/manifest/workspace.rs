//! Workspace directory resolution
//!
//! Expands the glob patterns declared in `workspaces` relative to the
//! manifest's directory. Only directories are returned, and wildcards never
//! match hidden (dot-prefixed) entries.

use crate::error::ManifestError;
use glob::MatchOptions;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolve workspace patterns to directories, in pattern order
///
/// Matches of one pattern come back sorted; a directory matched by several
/// patterns is only returned once.
pub fn resolve_workspace_dirs(
    manifest_path: &Path,
    patterns: &[String],
) -> Result<Vec<PathBuf>, ManifestError> {
    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let mut dirs: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let full_pattern = absolute_pattern(base, pattern);
        let entries = glob::glob_with(&full_pattern, match_options()).map_err(|e| {
            ManifestError::InvalidGlob {
                path: manifest_path.to_path_buf(),
                pattern: pattern.clone(),
                message: e.to_string(),
            }
        })?;

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "skipping unreadable workspace path");
                    continue;
                }
            };
            if path.is_dir() && !dirs.contains(&path) {
                dirs.push(path);
            }
        }
    }

    Ok(dirs)
}

fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    }
}

fn absolute_pattern(base: &Path, pattern: &str) -> String {
    let pattern = pattern.trim_end_matches('/');
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }

    let escaped_base = glob::Pattern::escape(&base.to_string_lossy());
    if pattern.is_empty() || pattern == "." {
        escaped_base
    } else {
        format!("{}/{}", escaped_base.trim_end_matches('/'), pattern)
    }
}
