//! Path resolution for path-valued settings.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/src`) - expanded to home directory
/// - Relative paths (`./state`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// The path does not need to exist.
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("./state/history.json", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/./state/history.json"));
    }

    #[test]
    fn test_resolve_relative_path_without_dot() {
        let resolved = resolve_path("history.json", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/history.json"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/var/og/history.json", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/var/og/history.json"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let resolved = resolve_path("~/src", Path::new("/project")).unwrap();
        assert_eq!(resolved, home.join("src"));
    }

    #[test]
    fn test_resolve_tilde_alone() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let resolved = resolve_path("~", Path::new("/project")).unwrap();
        assert_eq!(resolved, home);
    }

    #[test]
    fn test_tilde_user_not_expanded() {
        let resolved = resolve_path("~other/src", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/~other/src"));
    }
}
