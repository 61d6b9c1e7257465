//! yarn-sync - sync yarn.lock resolved versions into package.json
//!
//! This library provides the core functionality:
//! - Reading the resolved tree from `yarn list`
//! - Reconciling declared version ranges with resolved versions
//! - Rewriting package.json files while preserving layout
//! - Cascading into declared workspaces

pub mod cli;
pub mod dependency_tree;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod update;
