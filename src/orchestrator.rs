//! Sync orchestrator coordinating the manifest update workflow
//!
//! This module provides:
//! - Workflow coordination: read → reconcile → serialize → write → recurse
//! - Workspace cascade against the single root dependency tree
//! - Dry-run mode support
//! - Best-effort writes: a failed write is recorded and siblings continue

use crate::domain::{DependencyNode, ManifestSyncResult, PolicyFlags, SyncOutcome, SyncSummary};
use crate::error::AppError;
use crate::manifest::{
    detect_line_ending, read_manifest, resolve_workspace_dirs, workspace_subtree, ManifestWriter,
    PackageJson, MANIFEST_FILENAME,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Version preservation policy
    pub policy: PolicyFlags,
    /// Compute results without writing files
    pub dry_run: bool,
}

impl SyncOptions {
    /// Create options from a policy
    pub fn new(policy: PolicyFlags) -> Self {
        Self {
            policy,
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode (builder pattern)
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Synchronizes resolved versions into a manifest and its workspaces
pub struct Synchronizer {
    /// Run configuration
    options: SyncOptions,
    /// Output writer derived from the options
    writer: ManifestWriter,
    /// Package directories already processed in this run
    visited: HashSet<PathBuf>,
}

impl Synchronizer {
    /// Create a new synchronizer
    pub fn new(options: SyncOptions) -> Self {
        let writer = ManifestWriter::new(options.policy.save, options.dry_run);
        Self {
            options,
            writer,
            visited: HashSet::new(),
        }
    }

    /// Sync the manifest at `manifest_path` and every workspace below it
    pub fn run(
        &mut self,
        manifest_path: &Path,
        root_tree: &[DependencyNode],
    ) -> Result<SyncSummary, AppError> {
        self.visited.clear();
        let mut summary = SyncSummary::new(self.options.dry_run);
        summary.extend(self.update_package(manifest_path, root_tree)?);
        Ok(summary)
    }

    /// Sync one manifest, then recurse into its declared workspaces
    ///
    /// A missing manifest yields no result. Read and parse failures abort;
    /// write failures are recorded on the manifest's result.
    pub fn update_package(
        &mut self,
        manifest_path: &Path,
        root_tree: &[DependencyNode],
    ) -> Result<Vec<ManifestSyncResult>, AppError> {
        if !self.visited.insert(visit_key(manifest_path)) {
            debug!(path = %manifest_path.display(), "already synced, skipping");
            return Ok(Vec::new());
        }

        let Some(original) = read_manifest(manifest_path)? else {
            debug!(path = %manifest_path.display(), "manifest not found, skipping");
            return Ok(Vec::new());
        };

        let mut package = PackageJson::parse(manifest_path, &original)?;
        let subtree = workspace_subtree(root_tree, package.name());
        let changes = package.apply_tree(root_tree.iter().chain(subtree), &self.options.policy);

        let updated = package.to_pretty_string(detect_line_ending(&original))?;
        let target_path = self.writer.target_path(manifest_path);
        let outcome = match self.writer.write(manifest_path, &original, &updated) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(path = %target_path.display(), error = %e, "write failed");
                SyncOutcome::WriteFailed(e.to_string())
            }
        };
        info!(
            path = %target_path.display(),
            changes = changes.len(),
            outcome = %outcome,
            "manifest synced"
        );

        let mut results = vec![ManifestSyncResult::new(
            manifest_path,
            target_path,
            changes,
            outcome,
        )];

        let patterns = package.workspace_patterns()?;
        if !patterns.is_empty() {
            for dir in resolve_workspace_dirs(manifest_path, &patterns)? {
                let workspace_manifest = dir.join(MANIFEST_FILENAME);
                results.extend(self.update_package(&workspace_manifest, root_tree)?);
            }
        }

        Ok(results)
    }
}

fn visit_key(manifest_path: &Path) -> PathBuf {
    std::fs::canonicalize(manifest_path).unwrap_or_else(|_| manifest_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencySection;
    use std::fs;
    use tempfile::TempDir;

    fn tree(names: &[&str]) -> Vec<DependencyNode> {
        names.iter().map(|n| DependencyNode::new(*n)).collect()
    }

    fn write_package(dir: &Path, content: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(MANIFEST_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    fn synchronizer(policy: PolicyFlags) -> Synchronizer {
        Synchronizer::new(SyncOptions::new(policy))
    }

    #[test]
    fn test_missing_manifest_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(MANIFEST_FILENAME);

        let results = synchronizer(PolicyFlags::new())
            .update_package(&path, &tree(&["lodash@4.17.21"]))
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_malformed_manifest_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_package(temp_dir.path(), "{ not json");

        let result = synchronizer(PolicyFlags::new()).update_package(&path, &[]);
        assert!(matches!(result, Err(AppError::Manifest(_))));
    }

    #[test]
    fn test_writes_sibling_file() {
        let temp_dir = TempDir::new().unwrap();
        let original = "{\n  \"dependencies\": {\n    \"lodash\": \"^4.0.0\"\n  }\n}\n";
        let path = write_package(temp_dir.path(), original);

        let results = synchronizer(PolicyFlags::new())
            .update_package(&path, &tree(&["lodash@4.17.21"]))
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].outcome, SyncOutcome::Saved);
        assert_eq!(results[0].target_path, temp_dir.path().join("package.json.yarn"));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("package.json.yarn")).unwrap(),
            "{\n  \"dependencies\": {\n    \"lodash\": \"4.17.21\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_save_twice_reports_no_changes() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_package(
            temp_dir.path(),
            "{\n  \"dependencies\": {\n    \"lodash\": \"^4.0.0\"\n  }\n}\n",
        );
        let root = tree(&["lodash@4.17.21"]);
        let mut sync = synchronizer(PolicyFlags::new().with_save(true).with_keep_prefix(true));

        let first = sync.run(&path, &root).unwrap();
        assert_eq!(first.manifests[0].outcome, SyncOutcome::Saved);
        assert_eq!(first.total_changes(), 1);

        let second = sync.run(&path, &root).unwrap();
        assert_eq!(second.manifests[0].outcome, SyncOutcome::Unchanged);
        assert_eq!(second.total_changes(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("\"^4.17.21\""));
    }

    #[test]
    fn test_crlf_is_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_package(
            temp_dir.path(),
            "{\r\n  \"dependencies\": {\r\n    \"lodash\": \"^4.0.0\"\r\n  }\r\n}\r\n",
        );

        synchronizer(PolicyFlags::new().with_save(true))
            .update_package(&path, &tree(&["lodash@4.17.21"]))
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\r\n  \"dependencies\": {\r\n    \"lodash\": \"4.17.21\"\r\n  }\r\n}\r\n"
        );
    }

    #[test]
    fn test_workspace_subtree_overrides_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_package(
            temp_dir.path(),
            r#"{"name": "app", "dependencies": {"lodash": "^3.0.0"}}"#,
        );
        let root = vec![
            DependencyNode::new("lodash@4.17.21"),
            DependencyNode::new("app@1.0.0").with_children(tree(&["lodash@3.10.1"])),
        ];

        let results = synchronizer(PolicyFlags::new())
            .update_package(&path, &root)
            .unwrap();

        assert_eq!(results[0].changes[0].to, "3.10.1");
    }

    #[test]
    fn test_workspace_cascade_uses_root_tree() {
        let temp_dir = TempDir::new().unwrap();
        let root_path = write_package(
            temp_dir.path(),
            r#"{"name": "root", "private": true, "workspaces": ["packages/*"], "devDependencies": {"typescript": "^5.0.0"}}"#,
        );
        write_package(
            &temp_dir.path().join("packages/a"),
            r#"{"name": "a", "dependencies": {"lodash": "^4.0.0"}}"#,
        );
        write_package(
            &temp_dir.path().join("packages/b"),
            r#"{"name": "b", "dependencies": {"lodash": "~4.1.0", "react": "^18.0.0"}}"#,
        );
        fs::create_dir_all(temp_dir.path().join("packages/empty")).unwrap();

        let root = vec![
            DependencyNode::new("lodash@4.17.21"),
            DependencyNode::new("typescript@5.3.3"),
            DependencyNode::new("b@1.0.0").with_children(tree(&["react@18.2.0"])),
        ];
        let summary = synchronizer(PolicyFlags::new().with_keep_prefix(true))
            .run(&root_path, &root)
            .unwrap();

        assert_eq!(summary.files_processed(), 3);
        assert!(!temp_dir.path().join("packages/empty/package.json.yarn").exists());

        let a = fs::read_to_string(temp_dir.path().join("packages/a/package.json.yarn")).unwrap();
        assert!(a.contains("\"lodash\": \"^4.17.21\""));

        let b = fs::read_to_string(temp_dir.path().join("packages/b/package.json.yarn")).unwrap();
        assert!(b.contains("\"lodash\": \"~4.17.21\""));
        assert!(b.contains("\"react\": \"^18.2.0\""));

        let root_out = fs::read_to_string(temp_dir.path().join("package.json.yarn")).unwrap();
        assert!(root_out.contains("\"typescript\": \"^5.3.3\""));
        assert_eq!(
            summary.manifests[0].changes[0].section,
            DependencySection::DevDependencies
        );
    }

    #[test]
    fn test_self_referencing_workspace_terminates() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_package(
            temp_dir.path(),
            r#"{"name": "root", "workspaces": ["."], "dependencies": {"lodash": "^4.0.0"}}"#,
        );

        let summary = synchronizer(PolicyFlags::new())
            .run(&path, &tree(&["lodash@4.17.21"]))
            .unwrap();
        assert_eq!(summary.files_processed(), 1);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_package(temp_dir.path(), r#"{"dependencies": {"lodash": "^4.0.0"}}"#);

        let mut sync = Synchronizer::new(
            SyncOptions::new(PolicyFlags::new().with_save(true)).with_dry_run(true),
        );
        let summary = sync.run(&path, &tree(&["lodash@4.17.21"])).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.manifests[0].outcome, SyncOutcome::DryRun);
        assert_eq!(summary.total_changes(), 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"dependencies": {"lodash": "^4.0.0"}}"#
        );
    }

    #[test]
    fn test_invalid_workspaces_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_package(temp_dir.path(), r#"{"workspaces": "packages/*"}"#);

        let result = synchronizer(PolicyFlags::new()).run(&path, &[]);
        assert!(matches!(result, Err(AppError::Manifest(_))));
    }
}
