//! JSON output formatter for machine processing

use crate::domain::{ManifestSyncResult, SyncSummary};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-manifest results
    manifests: &'a [ManifestSyncResult],
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Manifests processed
    manifests: usize,
    /// Output files written
    saved: usize,
    /// Versions changed
    changes: usize,
    /// Output files that failed to write
    failed: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &SyncSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: summary.dry_run,
            summary: JsonSummary {
                manifests: summary.files_processed(),
                saved: summary.files_saved(),
                changes: summary.total_changes(),
                failed: summary.failures().count(),
            },
            manifests: &summary.manifests,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
