//! Resolved dependency tree from yarn
//!
//! This module provides:
//! - A provider trait for obtaining the resolved tree
//! - A provider running `yarn list --json --depth 1`
//! - A provider reading previously captured `yarn list --json` output
//! - Parsing of yarn's (NDJSON) list output

use crate::domain::DependencyNode;
use crate::error::TreeError;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::debug;

/// Default yarn executable
pub const DEFAULT_YARN: &str = "yarn";

/// Arguments passed to yarn to list the resolved tree
pub const LIST_ARGS: [&str; 4] = ["list", "--json", "--depth", "1"];

/// Source of the resolved dependency tree
pub trait TreeProvider {
    /// Return the top-level nodes of the resolved tree
    fn dependency_tree(&self) -> Result<Vec<DependencyNode>, TreeError>;
}

/// Runs yarn in the lockfile directory
#[derive(Debug, Clone)]
pub struct YarnTreeProvider {
    /// yarn executable
    program: String,
    /// Directory containing yarn.lock
    working_dir: PathBuf,
}

impl YarnTreeProvider {
    /// Create a provider running `program` inside `working_dir`
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Human-readable command line
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program, LIST_ARGS.join(" "))
    }

    fn run_command(&self) -> std::io::Result<Output> {
        Command::new(&self.program)
            .args(LIST_ARGS)
            .current_dir(&self.working_dir)
            .output()
    }
}

impl TreeProvider for YarnTreeProvider {
    fn dependency_tree(&self) -> Result<Vec<DependencyNode>, TreeError> {
        let command = self.command_line();
        debug!(command = %command, dir = %self.working_dir.display(), "listing dependency tree");

        let output = self.run_command().map_err(|source| TreeError::SpawnFailed {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(TreeError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_tree_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Reads captured `yarn list --json` output from a file
#[derive(Debug, Clone)]
pub struct FileTreeProvider {
    path: PathBuf,
}

impl FileTreeProvider {
    /// Create a provider reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TreeProvider for FileTreeProvider {
    fn dependency_tree(&self) -> Result<Vec<DependencyNode>, TreeError> {
        debug!(path = %self.path.display(), "reading dependency tree file");
        let content = std::fs::read_to_string(&self.path).map_err(|source| TreeError::ReadError {
            path: self.path.clone(),
            source,
        })?;
        parse_tree_output(&content)
    }
}

#[derive(Deserialize)]
struct ListDocument {
    data: ListData,
}

#[derive(Deserialize)]
struct ListData {
    trees: Vec<DependencyNode>,
}

/// Parse yarn list output into the top-level tree nodes
///
/// yarn prints one JSON object per line and may emit `info`/`warning`
/// lines before the tree. The whole output is tried as a single document
/// first, then each line in turn; the first document carrying
/// `data.trees` is used.
pub fn parse_tree_output(output: &str) -> Result<Vec<DependencyNode>, TreeError> {
    let output = output.trim();
    if output.is_empty() {
        return Err(TreeError::invalid_output("empty output"));
    }

    if let Ok(doc) = serde_json::from_str::<ListDocument>(output) {
        return Ok(doc.data.trees);
    }

    let mut last_error = None;
    for line in output.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match serde_json::from_str::<ListDocument>(line) {
            Ok(doc) => return Ok(doc.data.trees),
            Err(e) => last_error = Some(e),
        }
    }

    Err(TreeError::invalid_output(match last_error {
        Some(e) => format!("no document with data.trees found ({})", e),
        None => "no document with data.trees found".to_string(),
    }))
}
