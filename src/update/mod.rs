//! Version reconciliation logic
//!
//! This module provides:
//! - The reconciler deciding which version string to write for a dependency
//! - Range prefix extraction
//! - Semantic classification of a version change for display

mod change_kind;

pub use change_kind::ChangeKind;

use crate::domain::PolicyFlags;
use regex::Regex;
use std::sync::LazyLock;

static RANGE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\^><=~]+").expect("range prefix pattern is valid")
});

/// Returns the leading range operator run of a version string (`^`, `>=`, `~`, ...)
pub fn extract_prefix(version: &str) -> &str {
    RANGE_PREFIX
        .find(version)
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Decide the version string to write for a dependency
///
/// Rules are checked in order and the first match wins:
/// 1. `keep_git` and the current version contains `+`
/// 2. `keep_link` and the current version contains `link:`
/// 3. the current version contains a `keep_variable` substring
/// 4. `keep_prefix`: current range prefix followed by the new version
/// 5. the new version verbatim
pub fn reconcile(new_version: &str, current_version: &str, policy: &PolicyFlags) -> String {
    if policy.keep_git && current_version.contains('+') {
        return current_version.to_string();
    }
    if policy.keep_link && current_version.contains("link:") {
        return current_version.to_string();
    }
    if policy.matches_variable(current_version) {
        return current_version.to_string();
    }
    if policy.keep_prefix {
        return format!("{}{}", extract_prefix(current_version), new_version);
    }
    new_version.to_string()
}
