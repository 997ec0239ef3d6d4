//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, EditorSettings, HistorySettings, ServerSettings,
    parse::{RawConfig, RawEditorSettings, RawHistorySettings, RawServerSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory relative paths in this file are resolved against.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Every setting, `default_projects` included, takes the first defined value.
/// Lists are never concatenated across files.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut server = ServerSettings::default();
    let mut history = HistorySettings::default();
    let mut editor = EditorSettings::default();
    let mut server_url_source = None;

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let RawConfig {
            server: raw_server,
            history: raw_history,
            editor: raw_editor,
            ..
        } = &parsed.config;

        if let Some(raw) = raw_server {
            if raw.url.is_some() {
                server_url_source = Some(parsed.path.clone());
            }
            apply_raw_server(&mut server, raw);
        }
        if let Some(raw) = raw_history {
            apply_raw_history(&mut history, raw, parsed.dir())?;
        }
        if let Some(raw) = raw_editor {
            apply_raw_editor(&mut editor, raw, parsed.dir())?;
        }
    }

    Ok(Config {
        server,
        history,
        editor,
        config_root: configs.first().map(|c| c.dir().to_path_buf()),
        files: configs.iter().map(|c| c.path.clone()).collect(),
        server_url_source,
    })
}

/// Applies raw server settings to result, overwriting any present values.
fn apply_raw_server(result: &mut ServerSettings, raw: &RawServerSettings) {
    if let Some(ref v) = raw.url {
        result.url = Some(v.clone());
    }
    if let Some(ref v) = raw.default_projects {
        result.default_projects = v.clone();
    }
    if let Some(v) = raw.timeout_secs {
        result.timeout_secs = v;
    }
    if let Some(ref v) = raw.api_token {
        result.api_token = Some(v.clone());
    }
}

/// Applies raw history settings, resolving `state_file` against `config_dir`.
fn apply_raw_history(
    result: &mut HistorySettings,
    raw: &RawHistorySettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.keep_recent_searches {
        result.keep_recent_searches = v;
    }
    if let Some(ref v) = raw.state_file {
        result.state_file = Some(resolve_path(v, config_dir)?);
    }
    Ok(())
}

/// Applies raw editor settings, resolving `source_root` against `config_dir`.
fn apply_raw_editor(
    result: &mut EditorSettings,
    raw: &RawEditorSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref v) = raw.source_root {
        result.source_root = Some(resolve_path(v, config_dir)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config(toml).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty() {
        let config = merge_configs(&[]).unwrap();
        assert!(config.server.url.is_none());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_first_defined_scalar_wins() {
        let configs = [
            parsed(
                "/project/.og.toml",
                "[server]\nurl = \"http://local\"\n",
            ),
            parsed(
                "/home/me/.og.toml",
                "[server]\nurl = \"http://global\"\ntimeout_secs = 5\n",
            ),
        ];
        let config = merge_configs(&configs).unwrap();

        assert_eq!(config.server.url.as_deref(), Some("http://local"));
        // Only the global file sets the timeout
        assert_eq!(config.server.timeout_secs, 5);
    }

    #[test]
    fn test_server_url_source_is_defining_file() {
        let configs = [
            parsed("/project/.og.toml", "[server]\ntimeout_secs = 1\n"),
            parsed("/home/me/.og.toml", "[server]\nurl = \"http://global\"\n"),
        ];
        let config = merge_configs(&configs).unwrap();
        assert_eq!(
            config.server_url_source,
            Some(PathBuf::from("/home/me/.og.toml"))
        );

        let config = merge_configs(&configs[..1]).unwrap();
        assert!(config.server_url_source.is_none());
    }

    #[test]
    fn test_default_projects_not_concatenated() {
        let configs = [
            parsed("/project/.og.toml", "[server]\ndefault_projects = \"a\"\n"),
            parsed(
                "/home/me/.og.toml",
                "[server]\ndefault_projects = [\"b\", \"c\"]\n",
            ),
        ];
        let config = merge_configs(&configs).unwrap();
        assert_eq!(config.server.default_projects, vec!["a"]);
    }

    #[test]
    fn test_lower_precedence_fills_gaps() {
        let configs = [
            parsed("/project/.og.toml", "[history]\nkeep_recent_searches = 0\n"),
            parsed(
                "/home/me/.og.toml",
                "[server]\ndefault_projects = [\"b\"]\n",
            ),
        ];
        let config = merge_configs(&configs).unwrap();
        assert_eq!(config.history.keep_recent_searches, 0);
        assert_eq!(config.server.default_projects, vec!["b"]);
    }

    #[test]
    fn test_paths_resolved_against_their_file() {
        let configs = [
            parsed("/project/.og.toml", "[editor]\nsource_root = \"src\"\n"),
            parsed(
                "/home/me/.og.toml",
                "[history]\nstate_file = \"og/history.json\"\n",
            ),
        ];
        let config = merge_configs(&configs).unwrap();

        assert_eq!(
            config.editor.source_root,
            Some(PathBuf::from("/project/src"))
        );
        assert_eq!(
            config.history.state_file,
            Some(PathBuf::from("/home/me/og/history.json"))
        );
    }

    #[test]
    fn test_config_root_and_files() {
        let configs = [
            parsed("/project/sub/.og.toml", ""),
            parsed("/project/.og.toml", ""),
        ];
        let config = merge_configs(&configs).unwrap();

        assert_eq!(config.config_root, Some(PathBuf::from("/project/sub")));
        assert_eq!(
            config.files,
            vec![
                PathBuf::from("/project/sub/.og.toml"),
                PathBuf::from("/project/.og.toml"),
            ]
        );
    }
}
