//! Sync result summary types
//!
//! Provides structures for tracking sync results at file and overall levels.

use super::VersionChange;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What happened to the output file of a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Output file was written
    Saved,
    /// In-place save skipped because the content is identical
    Unchanged,
    /// Dry run: nothing written
    DryRun,
    /// Writing the output file failed
    WriteFailed(String),
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::Saved => write!(f, "saved"),
            SyncOutcome::Unchanged => write!(f, "no changes"),
            SyncOutcome::DryRun => write!(f, "dry run"),
            SyncOutcome::WriteFailed(msg) => write!(f, "write failed: {}", msg),
        }
    }
}

/// Sync result for a single manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSyncResult {
    /// Path to the manifest that was read
    pub manifest_path: PathBuf,
    /// Path the synced manifest is written to
    pub target_path: PathBuf,
    /// Dependencies whose version string changed
    pub changes: Vec<VersionChange>,
    /// Outcome of the write
    #[serde(flatten)]
    pub outcome: SyncOutcome,
}

impl ManifestSyncResult {
    /// Creates a new ManifestSyncResult
    pub fn new(
        manifest_path: impl Into<PathBuf>,
        target_path: impl Into<PathBuf>,
        changes: Vec<VersionChange>,
        outcome: SyncOutcome,
    ) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            target_path: target_path.into(),
            changes,
            outcome,
        }
    }

    /// Returns the number of changed versions
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if any version string changed
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Returns true if writing the output failed
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, SyncOutcome::WriteFailed(_))
    }
}

/// Overall summary of a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    /// Results for each manifest, in visiting order
    pub manifests: Vec<ManifestSyncResult>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl SyncSummary {
    /// Creates a new SyncSummary
    pub fn new(dry_run: bool) -> Self {
        Self {
            manifests: Vec::new(),
            dry_run,
        }
    }

    /// Adds manifest results
    pub fn extend(&mut self, results: impl IntoIterator<Item = ManifestSyncResult>) {
        self.manifests.extend(results);
    }

    /// Returns the total number of manifests processed
    pub fn files_processed(&self) -> usize {
        self.manifests.len()
    }

    /// Returns the number of output files written
    pub fn files_saved(&self) -> usize {
        self.manifests
            .iter()
            .filter(|m| m.outcome == SyncOutcome::Saved)
            .count()
    }

    /// Returns the total number of changed versions
    pub fn total_changes(&self) -> usize {
        self.manifests.iter().map(|m| m.change_count()).sum()
    }

    /// Returns the manifests whose output could not be written
    pub fn failures(&self) -> impl Iterator<Item = &ManifestSyncResult> {
        self.manifests.iter().filter(|m| m.is_failed())
    }

    /// Returns true if any write failed
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
