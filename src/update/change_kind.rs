//! Semantic classification of a version change

use colored::Colorize;
use semver::Version;

/// Kind of change between the declared and the synced version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch or prerelease change (fixes)
    Patch,
    /// Only the range operator changed or was dropped
    Range,
    /// Not comparable as semver (git urls, tags, ...)
    Unknown,
}

impl ChangeKind {
    /// Classify the change between two version strings
    ///
    /// Range operators are ignored for the numeric comparison. Partial
    /// versions such as `^4` or `~1.2` are padded with zeros.
    pub fn classify(from: &str, to: &str) -> Self {
        let (Some(old), Some(new)) = (parse_loose(from), parse_loose(to)) else {
            return ChangeKind::Unknown;
        };

        if old.major != new.major {
            ChangeKind::Major
        } else if old.minor != new.minor {
            ChangeKind::Minor
        } else if old != new {
            ChangeKind::Patch
        } else {
            ChangeKind::Range
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
            ChangeKind::Range => "range",
            ChangeKind::Unknown => "?",
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            ChangeKind::Major => self.label().red().bold().to_string(),
            ChangeKind::Minor => self.label().yellow().to_string(),
            ChangeKind::Patch => self.label().green().to_string(),
            ChangeKind::Range => self.label().cyan().to_string(),
            ChangeKind::Unknown => self.label().dimmed().to_string(),
        }
    }
}

fn parse_loose(version: &str) -> Option<Version> {
    let trimmed = version
        .trim()
        .trim_start_matches(['^', '~', '>', '<', '=', 'v'])
        .trim();
    if let Ok(v) = Version::parse(trimmed) {
        return Some(v);
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    let padded = match parts.as_slice() {
        [major] => format!("{}.0.0", major),
        [major, minor] => format!("{}.{}.0", major, minor),
        _ => return None,
    };
    Version::parse(&padded).ok()
}
