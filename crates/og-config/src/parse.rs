//! Configuration file parsing.
//!
//! Parses individual `.og.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Server section.
    pub server: Option<RawServerSettings>,
    /// History section.
    pub history: Option<RawHistorySettings>,
    /// Editor section.
    pub editor: Option<RawEditorSettings>,
}

/// Raw `[server]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawServerSettings {
    /// Base URL of the OpenGrok web application.
    pub url: Option<String>,
    /// Projects added to every search. Accepts a string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub default_projects: Option<Vec<String>>,
    /// Request timeout in seconds, 0 for none.
    pub timeout_secs: Option<u64>,
    /// Bearer token for the search API.
    pub api_token: Option<String>,
}

/// Raw `[history]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawHistorySettings {
    /// Number of searches kept, 0 for unlimited.
    pub keep_recent_searches: Option<usize>,
    /// History file location, relative to the config file.
    pub state_file: Option<String>,
}

/// Raw `[editor]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawEditorSettings {
    /// Local checkout that server paths are resolved against.
    pub source_root: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.server.is_none());
        assert!(config.history.is_none());
        assert!(config.editor.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[server]
url = "https://opengrok.example.com/source"
default_projects = ["kernel", "libc"]
timeout_secs = 10
api_token = "secret"

[history]
keep_recent_searches = 5
state_file = "state/history.json"

[editor]
source_root = "~/src"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));

        let server = config.server.unwrap();
        assert_eq!(
            server.url.as_deref(),
            Some("https://opengrok.example.com/source")
        );
        assert_eq!(
            server.default_projects,
            Some(vec!["kernel".to_string(), "libc".to_string()])
        );
        assert_eq!(server.timeout_secs, Some(10));
        assert_eq!(server.api_token.as_deref(), Some("secret"));

        let history = config.history.unwrap();
        assert_eq!(history.keep_recent_searches, Some(5));
        assert_eq!(history.state_file.as_deref(), Some("state/history.json"));

        assert_eq!(config.editor.unwrap().source_root.as_deref(), Some("~/src"));
    }

    #[test]
    fn test_default_projects_accepts_string() {
        let toml = r#"
[server]
default_projects = "kernel"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(
            config.server.unwrap().default_projects,
            Some(vec!["kernel".to_string()])
        );
    }

    #[test]
    fn test_default_projects_absent() {
        let toml = r#"
[server]
url = "http://localhost:8080"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert!(config.server.unwrap().default_projects.is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("[server\nurl = 1", Path::new("bad.toml"));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_wrong_type() {
        let toml = r#"
[history]
keep_recent_searches = "many"
"#;
        assert!(parse_config_str(toml, Path::new("test.toml")).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let toml = r#"
[server]
uri = "http://typo"
"#;
        assert!(parse_config_str(toml, Path::new("test.toml")).is_err());
    }

    #[test]
    fn test_parse_config_file_missing() {
        let test_dir = TestDir::new();
        let missing = test_dir.path().join("nope.toml");
        let err = parse_config_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_is_root_config() {
        let test_dir = TestDir::new();
        let config_path = test_dir.path().join("config.toml");

        fs::write(&config_path, "root = true\n").unwrap();
        assert!(is_root_config(&config_path));

        fs::write(&config_path, "root = false\n").unwrap();
        assert!(!is_root_config(&config_path));

        fs::write(&config_path, "[server]\n").unwrap();
        assert!(!is_root_config(&config_path));

        fs::write(&config_path, "not toml [[[").unwrap();
        assert!(!is_root_config(&config_path));
    }
}
