//! Version change records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dependency section of a package.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencySection {
    #[serde(rename = "dependencies")]
    Dependencies,
    #[serde(rename = "devDependencies")]
    DevDependencies,
}

impl DependencySection {
    /// Sections in lookup order
    pub fn all() -> &'static [DependencySection] {
        &[
            DependencySection::Dependencies,
            DependencySection::DevDependencies,
        ]
    }

    /// Key of this section in package.json
    pub fn key(&self) -> &'static str {
        match self {
            DependencySection::Dependencies => "dependencies",
            DependencySection::DevDependencies => "devDependencies",
        }
    }

    /// Returns true for devDependencies
    pub fn is_dev(&self) -> bool {
        matches!(self, DependencySection::DevDependencies)
    }
}

impl fmt::Display for DependencySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A rewritten version string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChange {
    /// Package name
    pub name: String,
    /// Section the package is declared in
    pub section: DependencySection,
    /// Version string before the sync
    pub from: String,
    /// Version string after the sync
    pub to: String,
}

impl VersionChange {
    /// Creates a new VersionChange
    pub fn new(
        name: impl Into<String>,
        section: DependencySection,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            section,
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.section.is_dev() { " (dev)" } else { "" };
        write!(f, "{}: {} -> {}{}", self.name, self.from, self.to, dev_marker)
    }
}
