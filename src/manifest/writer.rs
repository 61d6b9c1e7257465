//! Synced manifest writing
//!
//! This module provides:
//! - ManifestWriter choosing the output path (in place or `package.json.yarn`)
//! - Skipping identical in-place saves
//! - Dry-run mode support (no actual file modifications)

use crate::domain::SyncOutcome;
use crate::error::ManifestError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Suffix appended to the manifest file name when not saving in place
pub const SIBLING_SUFFIX: &str = ".yarn";

/// Writer for synced manifest files
#[derive(Debug, Clone, Copy)]
pub struct ManifestWriter {
    /// Overwrite the manifest instead of writing a sibling file
    save: bool,
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

impl ManifestWriter {
    /// Create a new ManifestWriter
    pub fn new(save: bool, dry_run: bool) -> Self {
        Self { save, dry_run }
    }

    /// Path the synced content of `manifest_path` is written to
    pub fn target_path(&self, manifest_path: &Path) -> PathBuf {
        if self.save {
            return manifest_path.to_path_buf();
        }
        let mut file_name = manifest_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "package.json".into());
        file_name.push(SIBLING_SUFFIX);
        manifest_path.with_file_name(file_name)
    }

    /// Write the synced content
    ///
    /// An in-place save is skipped when the content is unchanged. The
    /// sibling file is always regenerated.
    pub fn write(
        &self,
        manifest_path: &Path,
        original: &str,
        updated: &str,
    ) -> Result<SyncOutcome, ManifestError> {
        if self.save && original == updated {
            return Ok(SyncOutcome::Unchanged);
        }
        if self.dry_run {
            return Ok(SyncOutcome::DryRun);
        }

        write_manifest(&self.target_path(manifest_path), updated)?;
        Ok(SyncOutcome::Saved)
    }
}

/// Read a manifest file, `None` when it does not exist
pub fn read_manifest(path: &Path) -> Result<Option<String>, ManifestError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ManifestError::read_error(path, e)),
    }
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
