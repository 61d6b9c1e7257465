//! Diff output formatter for showing changed versions

use crate::domain::{ManifestSyncResult, SyncSummary};
use crate::output::OutputFormatter;
use std::io::Write;

/// Diff formatter for showing version changes
#[derive(Debug, Default)]
pub struct DiffFormatter;

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new() -> Self {
        Self
    }

    fn format_manifest(
        &self,
        manifest: &ManifestSyncResult,
        dry_run: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if !manifest.has_changes() {
            return Ok(());
        }

        let prefix = if dry_run { "(dry-run) " } else { "" };
        writeln!(writer, "{}--- a/{}", prefix, manifest.manifest_path.display())?;
        writeln!(writer, "{}+++ b/{}", prefix, manifest.target_path.display())?;

        for change in &manifest.changes {
            writeln!(writer, "@@ {} {} @@", change.section, change.name)?;
            writeln!(writer, "-    \"{}\": \"{}\"", change.name, change.from)?;
            writeln!(writer, "+    \"{}\": \"{}\"", change.name, change.to)?;
        }
        writeln!(writer)
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, summary: &SyncSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        for manifest in &summary.manifests {
            self.format_manifest(manifest, summary.dry_run, writer)?;
        }

        let prefix = if summary.dry_run { "(dry-run) " } else { "" };
        writeln!(
            writer,
            "{}# {} version(s) synced in {} manifest(s)",
            prefix,
            summary.total_changes(),
            summary.files_processed()
        )
    }
}
