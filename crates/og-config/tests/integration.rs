//! Integration tests for og-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use og_config::{Config, ConfigError, ConfigScope, ConfigWarning, init_template};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Owned temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_single_root_config() {
    let env = TestEnv::new();
    env.create_file(
        ".og.toml",
        r#"
root = true

[server]
url = "https://og.example.com/source"
default_projects = "kernel"

[history]
keep_recent_searches = 3
"#,
    );

    let config = Config::load(env.path()).unwrap();

    assert_eq!(
        config.server.url.as_deref(),
        Some("https://og.example.com/source")
    );
    assert_eq!(config.server.default_projects, vec!["kernel"]);
    assert_eq!(config.history.keep_recent_searches, 3);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert!(config.validate().is_empty());
}

#[test]
fn test_nested_config_overrides_parent() {
    let env = TestEnv::new();
    env.create_file(
        ".og.toml",
        r#"
root = true

[server]
url = "http://parent"
default_projects = ["a", "b"]
timeout_secs = 7
"#,
    );
    env.create_file(
        "project/.og.toml",
        r#"
[server]
url = "http://child"
"#,
    );
    let cwd = env.create_dir("project/src");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.server.url.as_deref(), Some("http://child"));
    assert_eq!(config.server.default_projects, vec!["a", "b"]);
    assert_eq!(config.server.timeout_secs, 7);
    assert_eq!(config.files.len(), 2);
    assert_eq!(config.config_root, Some(env.path().join("project")));
}

#[test]
fn test_relative_paths_follow_defining_file() {
    let env = TestEnv::new();
    env.create_file(
        ".og.toml",
        r#"
root = true

[history]
state_file = "state/history.json"

[editor]
source_root = "checkout"
"#,
    );
    env.create_dir("checkout");
    let cwd = env.create_dir("deep/down");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(
        config.history.state_file,
        Some(env.path().join("state/history.json"))
    );
    assert_eq!(config.editor.source_root, Some(env.path().join("checkout")));
}

#[test]
fn test_invalid_config_is_error() {
    let env = TestEnv::new();
    env.create_file(".og.toml", "root = true\n[server\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_validate_reports_problems() {
    let env = TestEnv::new();
    env.create_file(
        ".og.toml",
        r#"
root = true

[server]
url = "opengrok.example.com"

[editor]
source_root = "missing"
"#,
    );

    let warnings = Config::load(env.path()).unwrap().validate();

    assert_eq!(warnings.len(), 2);
    assert!(matches!(warnings[0], ConfigWarning::ServerNotHttp { .. }));
    assert!(matches!(
        warnings[1],
        ConfigWarning::SourceRootMissing { .. }
    ));
}

#[test]
fn test_templates_load_as_empty_config() {
    let env = TestEnv::new();
    let local = env.create_file("local/.og.toml", &init_template(ConfigScope::Local));
    let global = env.create_file("global/.og.toml", &init_template(ConfigScope::Global));

    let config = Config::load_from_files(&[local, global]).unwrap();

    assert!(config.server.url.is_none());
    assert_eq!(config.history.keep_recent_searches, 20);
}

#[test]
fn test_load_from_no_files_is_default() {
    let config = Config::load_from_files(&[]).unwrap();
    assert!(config.files.is_empty());
    assert_eq!(config.validate(), vec![ConfigWarning::ServerMissing]);
}
