//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No server URL is configured.
    ServerMissing,
    /// The server URL does not use `http` or `https`.
    ServerNotHttp {
        /// The configured URL.
        url: String,
    },
    /// The source root does not exist.
    SourceRootMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The source root exists but is not a directory.
    SourceRootNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerMissing => write!(f, "no server url is configured"),
            Self::ServerNotHttp { url } => {
                write!(f, "server url is not http or https: {url}")
            }
            Self::SourceRootMissing { path } => {
                write!(f, "editor source root does not exist: {path}")
            }
            Self::SourceRootNotDirectory { path } => {
                write!(f, "editor source root is not a directory: {path}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match config.server.url.as_deref().map(str::trim) {
        None | Some("") => warnings.push(ConfigWarning::ServerMissing),
        Some(url) if !is_http(url) => warnings.push(ConfigWarning::ServerNotHttp {
            url: url.to_string(),
        }),
        Some(_) => {}
    }

    if let Some(root) = &config.editor.source_root {
        if !root.exists() {
            warnings.push(ConfigWarning::SourceRootMissing {
                path: root.display().to_string(),
            });
        } else if !root.is_dir() {
            warnings.push(ConfigWarning::SourceRootNotDirectory {
                path: root.display().to_string(),
            });
        }
    }

    warnings
}

/// Returns true if `url` starts with an `http` or `https` scheme.
fn is_http(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
