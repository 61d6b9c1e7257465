//! package.json handling
//!
//! This module provides functionality to:
//! - Parse package.json while keeping key order
//! - Rewrite declared versions from the resolved tree
//! - Preserve the source line ending style
//! - Resolve workspace directories
//! - Write the synced manifest in place or next to it

mod line_ending;
mod package_json;
mod workspace;
mod writer;

pub use line_ending::{detect_line_ending, normalize_line_endings, HOST_LINE_ENDING};
pub use package_json::{workspace_subtree, PackageJson};
pub use workspace::resolve_workspace_dirs;
pub use writer::{read_manifest, write_manifest, ManifestWriter, SIBLING_SUFFIX};

/// File name of the manifest in every package directory
pub const MANIFEST_FILENAME: &str = "package.json";
