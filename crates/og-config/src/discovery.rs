//! Locating `.og.toml` files.
//!
//! A project can pin its own server and history by placing `.og.toml` in the
//! project directory; everything else falls through to `~/.og.toml`.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// Name of every og configuration file.
pub const CONFIG_FILENAME: &str = ".og.toml";

/// Where a configuration file sits relative to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// In the working directory or one of its ancestors.
    Local,
    /// The per-user `~/.og.toml`.
    Global,
}

impl ConfigScope {
    /// Classifies `path` by comparing it with the per-user config path.
    pub fn of(path: &Path) -> Self {
        if global_config_path().is_some_and(|global| path == global) {
            Self::Global
        } else {
            Self::Local
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Global => "global",
        })
    }
}

/// Finds the config files that apply in `cwd`, most specific first.
///
/// Every ancestor of `cwd` is checked. A file with `root = true` ends the
/// search, and `~/.og.toml` is then ignored; otherwise it comes last.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let candidates = cwd
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .filter(|path| path.is_file());
    for path in candidates {
        let stop = is_root_config(&path);
        files.push(path);
        if stop {
            return files;
        }
    }

    if let Some(global) = global_config_path().filter(|g| g.is_file() && !files.contains(g)) {
        files.push(global);
    }
    files
}

/// Path of `~/.og.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    Some(BaseDirs::new()?.home_dir().join(CONFIG_FILENAME))
}
