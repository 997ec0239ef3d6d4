//! Error types for the og-tree crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or writing the search history.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the history file.
    #[error("failed to read history file {path}: {source}")]
    Read {
        /// Path to the history file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the history file.
    #[error("failed to write history file {path}: {source}")]
    Write {
        /// Path to the history file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The history file is not valid JSON for the expected shape.
    #[error("failed to parse history file {path}: {source}")]
    Parse {
        /// Path to the history file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The history file was written by an incompatible version.
    #[error("unsupported history version {version} in {path}")]
    UnsupportedVersion {
        /// Path to the history file.
        path: PathBuf,
        /// Version found in the file.
        version: u32,
    },

    /// Failed to encode the history.
    #[error("failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors from parsing a dotted node path such as `1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodePathError {
    /// The path had no components.
    #[error("empty node path")]
    Empty,

    /// A component was not a positive integer.
    #[error("invalid node path component '{0}': expected a number starting at 1")]
    InvalidComponent(String),
}
