//! Starter files written by `og init`.
//!
//! The sources under `templates/` are live TOML so they can be checked by the
//! parser; `og init` writes them with every setting commented out.

use crate::ConfigScope;

/// Source of the project-level template.
const LOCAL_SOURCE: &str = include_str!("../templates/config.toml");

/// Source of the per-user template.
const GLOBAL_SOURCE: &str = include_str!("../templates/config-global.toml");

/// Returns the starter file for `scope` with every setting commented out.
pub fn init_template(scope: ConfigScope) -> String {
    let source = match scope {
        ConfigScope::Local => LOCAL_SOURCE,
        ConfigScope::Global => GLOBAL_SOURCE,
    };
    source.lines().map(commented).collect()
}

/// Prefixes a setting or table header with `# `, keeping comments and blanks.
fn commented(line: &str) -> String {
    if line.is_empty() || line.starts_with('#') {
        format!("{line}\n")
    } else {
        format!("# {line}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn sources_are_valid_config() {
        for source in [LOCAL_SOURCE, GLOBAL_SOURCE] {
            let config = parse_config(source).unwrap();
            assert!(config.server.is_some());
        }
    }

    #[test]
    fn written_templates_set_nothing() {
        for scope in [ConfigScope::Local, ConfigScope::Global] {
            let config = parse_config(&init_template(scope)).unwrap();
            assert!(config.root.is_none());
            assert!(config.server.is_none());
            assert!(config.history.is_none());
            assert!(config.editor.is_none());
        }
    }

    #[test]
    fn global_template_mentions_history() {
        let text = init_template(ConfigScope::Global);
        assert!(text.contains("# [history]"));
        assert!(text.contains("# keep_recent_searches = 20"));
        assert!(!init_template(ConfigScope::Local).contains("# [history]"));
    }

    #[test]
    fn commented_lines() {
        assert_eq!(commented("[server]"), "# [server]\n");
        assert_eq!(commented("url = \"x\""), "# url = \"x\"\n");
        assert_eq!(commented("# note"), "# note\n");
        assert_eq!(commented(""), "\n");
    }
}
