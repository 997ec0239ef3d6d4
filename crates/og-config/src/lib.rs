//! Configuration system for og.
//!
//! og uses TOML configuration files named `.og.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.og.toml` files found,
//! then loading `~/.og.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub use discovery::{CONFIG_FILENAME, ConfigScope, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawEditorSettings, RawHistorySettings, RawServerSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_path;
use serde::Serialize;
pub use templates::init_template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for og.
///
/// This represents the fully resolved configuration after merging all discovered `.og.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Search server settings.
    pub server: ServerSettings,
    /// Saved-search settings.
    pub history: HistorySettings,
    /// Editor integration settings.
    pub editor: EditorSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub files: Vec<PathBuf>,
    /// File whose `[server] url` is in effect.
    pub server_url_source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.og.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.og.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.og.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A missing server URL
    /// - A server URL that is not `http` or `https`
    /// - A source root that doesn't exist or isn't a directory
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.og.toml` file. The API token is
    /// never included.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            server: &self.server,
            history: &self.history,
            editor: &self.editor,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Settings for reaching the OpenGrok server.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSettings {
    /// Base URL of the OpenGrok web application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Projects added to every search.
    pub default_projects: Vec<String>,
    /// Request timeout in seconds, 0 for none.
    pub timeout_secs: u64,
    /// Bearer token for the search API.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: None,
            default_projects: Vec::new(),
            timeout_secs: 30,
            api_token: None,
        }
    }
}

impl ServerSettings {
    /// Returns the request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Settings for the saved-search history.
#[derive(Debug, Clone, Serialize)]
pub struct HistorySettings {
    /// Number of searches kept, 0 for unlimited.
    pub keep_recent_searches: usize,
    /// Resolved history file location, if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            keep_recent_searches: 20,
            state_file: None,
        }
    }
}

/// Settings for opening matches in a local checkout.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditorSettings {
    /// Resolved local checkout root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<PathBuf>,
}

/// Borrowed settings for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Server settings.
    server: &'a ServerSettings,
    /// History settings.
    history: &'a HistorySettings,
    /// Editor settings.
    editor: &'a EditorSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let server = ServerSettings::default();
        assert!(server.url.is_none());
        assert!(server.default_projects.is_empty());
        assert_eq!(server.timeout_secs, 30);
        assert_eq!(server.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let server = ServerSettings {
            timeout_secs: 0,
            ..ServerSettings::default()
        };
        assert_eq!(server.timeout(), None);
    }

    #[test]
    fn test_history_defaults() {
        let history = HistorySettings::default();
        assert_eq!(history.keep_recent_searches, 20);
        assert!(history.state_file.is_none());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.config_root.is_none());
        assert!(config.files.is_empty());
        assert!(config.editor.source_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.server.url = Some("https://og.example.com/source".into());
        config.server.default_projects = vec!["kernel".into()];
        config.server.api_token = Some("secret".into());

        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[server]"));
        assert!(toml.contains("[history]"));
        assert!(toml.contains("url = \"https://og.example.com/source\""));
        assert!(toml.contains("keep_recent_searches = 20"));
        assert!(!toml.contains("secret"));
        assert!(!toml.contains("api_token"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("server").is_some());
        assert!(parsed.get("history").is_some());
    }
}
