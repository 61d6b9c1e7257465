//! Text output formatter for human-readable display
//!
//! Prints one line per manifest (`Saved <path>` or `No changes to <path>`),
//! plus the changed versions and a summary in verbose mode.

use crate::domain::{ManifestSyncResult, SyncOutcome, SyncSummary, VersionChange};
use crate::output::{OutputFormatter, Verbosity};
use crate::update::ChangeKind;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn format_manifest(
        &self,
        manifest: &ManifestSyncResult,
        dry_run: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet && !manifest.is_failed() {
            return Ok(());
        }

        writeln!(writer, "{}", self.status_line(manifest, dry_run))?;

        if self.verbosity == Verbosity::Verbose {
            let max_name_len = manifest
                .changes
                .iter()
                .map(|c| c.name.len())
                .max()
                .unwrap_or(0);
            for change in &manifest.changes {
                self.format_change_line(change, max_name_len, writer)?;
            }
        }
        Ok(())
    }

    fn status_line(&self, manifest: &ManifestSyncResult, dry_run: bool) -> String {
        let path = manifest.target_path.display().to_string();
        let prefix = if dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        };

        let body = match &manifest.outcome {
            SyncOutcome::Saved => format!("Saved {}", path),
            SyncOutcome::DryRun => format!("Would save {}", path),
            SyncOutcome::Unchanged if self.color => format!("No changes to {}", path)
                .dimmed()
                .to_string(),
            SyncOutcome::Unchanged => format!("No changes to {}", path),
            SyncOutcome::WriteFailed(msg) if self.color => {
                format!("Failed to save {}: {}", path, msg).red().to_string()
            }
            SyncOutcome::WriteFailed(msg) => format!("Failed to save {}: {}", path, msg),
        };
        format!("{}{}", prefix, body)
    }

    fn format_change_line(
        &self,
        change: &VersionChange,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let kind = ChangeKind::classify(&change.from, &change.to);

        if self.color {
            let name_display = format!("{:width$}", change.name, width = max_name_len);
            let dev_display = if change.section.is_dev() {
                " (dev)".dimmed().to_string()
            } else {
                String::new()
            };
            writeln!(
                writer,
                "  {} {} {} {} [{}]{}",
                name_display,
                change.from.dimmed(),
                "→".dimmed(),
                change.to.bright_white().bold(),
                kind.colored_label(),
                dev_display
            )
        } else {
            let dev_marker = if change.section.is_dev() { " (dev)" } else { "" };
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}]{}",
                change.name,
                change.from,
                change.to,
                kind.label(),
                dev_marker,
                width = max_name_len
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &SyncSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        for manifest in &summary.manifests {
            self.format_manifest(manifest, summary.dry_run, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "{} manifest(s) processed, {} saved, {} version(s) synced",
                summary.files_processed(),
                summary.files_saved(),
                summary.total_changes()
            )?;
        }
        Ok(())
    }
}
