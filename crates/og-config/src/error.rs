//! Configuration errors.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Failure to turn `.og.toml` files into a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A discovered file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Offending file.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },

    /// A file is not valid TOML or has unknown keys.
    #[error("invalid config in {path}: {source}")]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Parser diagnostics, including the line.
        source: de::Error,
    },

    /// A `~` path was used but there is no home directory.
    #[error("cannot expand '~': no home directory")]
    NoHomeDirectory,

    /// `og config` could not render the effective settings.
    #[error("cannot render settings as TOML: {0}")]
    Serialize(#[from] ser::Error),
}
