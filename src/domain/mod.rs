//! Core domain models for yarn-sync
//!
//! This module contains the fundamental types used throughout the application:
//! - Resolved dependency tree nodes as reported by `yarn list`
//! - Policy flags controlling how version strings are rewritten
//! - Per-dependency version changes
//! - Per-manifest and overall sync results

mod change;
mod dependency_node;
mod policy;
mod summary;

pub use change::{DependencySection, VersionChange};
pub use dependency_node::DependencyNode;
pub use policy::PolicyFlags;
pub use summary::{ManifestSyncResult, SyncOutcome, SyncSummary};
