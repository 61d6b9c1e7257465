//! Version preservation policy

use serde::{Deserialize, Serialize};

/// Flags selecting which current version strings survive a sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFlags {
    /// Overwrite package.json in place instead of writing package.json.yarn
    pub save: bool,
    /// Keep the leading range operator (`^`, `~`, `>=`, ...)
    pub keep_prefix: bool,
    /// Keep versions pinned to a git hash (contain `+`)
    pub keep_git: bool,
    /// Keep `link:` versions
    pub keep_link: bool,
    /// Keep versions containing any of these substrings
    pub keep_variable: Option<Vec<String>>,
}

impl PolicyFlags {
    /// Creates a policy with every flag off
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the save flag (builder pattern)
    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    /// Sets the keep-prefix flag (builder pattern)
    pub fn with_keep_prefix(mut self, keep: bool) -> Self {
        self.keep_prefix = keep;
        self
    }

    /// Sets the keep-git flag (builder pattern)
    pub fn with_keep_git(mut self, keep: bool) -> Self {
        self.keep_git = keep;
        self
    }

    /// Sets the keep-link flag (builder pattern)
    pub fn with_keep_link(mut self, keep: bool) -> Self {
        self.keep_link = keep;
        self
    }

    /// Sets the keep-variable substrings (builder pattern)
    pub fn with_keep_variable<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_variable = Some(variables.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if `version` contains one of the keep-variable substrings
    ///
    /// Empty entries never match.
    pub fn matches_variable(&self, version: &str) -> bool {
        self.keep_variable.as_ref().is_some_and(|vars| {
            vars.iter()
                .any(|v| !v.is_empty() && version.contains(v.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PolicyFlags::new();
        assert!(!policy.save);
        assert!(!policy.keep_prefix);
        assert!(!policy.keep_git);
        assert!(!policy.keep_link);
        assert!(policy.keep_variable.is_none());
    }

    #[test]
    fn test_matches_variable() {
        let policy = PolicyFlags::new().with_keep_variable(["github:", "file:"]);
        assert!(policy.matches_variable("github:user/repo"));
        assert!(policy.matches_variable("file:../local"));
        assert!(!policy.matches_variable("^1.0.0"));
    }

    #[test]
    fn test_matches_variable_ignores_empty_entries() {
        let policy = PolicyFlags::new().with_keep_variable(["", "link:"]);
        assert!(!policy.matches_variable("^1.0.0"));
        assert!(policy.matches_variable("link:../pkg"));
    }

    #[test]
    fn test_matches_variable_unset() {
        assert!(!PolicyFlags::new().matches_variable("anything"));
    }
}
