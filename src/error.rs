//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading, parsing or writing package.json
//! - TreeError: Issues with obtaining the resolved dependency tree from yarn
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Dependency tree related errors
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// `workspaces` field is neither an array nor an object with `packages`
    #[error("invalid workspaces declaration in {path}: {message}")]
    InvalidWorkspaces { path: PathBuf, message: String },

    /// Workspace glob pattern could not be compiled
    #[error("invalid workspace pattern '{pattern}' in {path}: {message}")]
    InvalidGlob {
        path: PathBuf,
        pattern: String,
        message: String,
    },
}

/// Errors related to the `yarn list` dependency tree
#[derive(Error, Debug)]
pub enum TreeError {
    /// The yarn executable could not be started
    #[error("failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// yarn exited with a non-zero status
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Output did not contain a dependency tree
    #[error("invalid dependency tree output: {message}")]
    InvalidOutput { message: String },

    /// Failed to read a captured tree file
    #[error("failed to read dependency tree file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidWorkspaces error
    pub fn invalid_workspaces(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::InvalidWorkspaces {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl TreeError {
    /// Creates a new InvalidOutput error
    pub fn invalid_output(message: impl Into<String>) -> Self {
        TreeError::InvalidOutput {
            message: message.into(),
        }
    }
}
