//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use og_client::ClientOptions;
use og_config::Config;
use og_tree::{HistoryStore, Node, NodePath, ResultCollection};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// History file given with `--state`.
    state_override: Option<PathBuf>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(state_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            state_override,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only(state_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            state_override,
        })
    }

    /// Returns the history store.
    ///
    /// `--state` wins over `[history] state_file`, which wins over the
    /// platform data directory.
    pub fn store(&self) -> Result<HistoryStore, ExitCode> {
        let path = self
            .state_override
            .as_ref()
            .map(|p| self.cwd.join(p))
            .or_else(|| self.config.history.state_file.clone())
            .or_else(HistoryStore::default_location);

        match path {
            Some(path) => {
                debug!(path = %path.display(), "using history file");
                Ok(HistoryStore::new(path))
            }
            None => {
                eprintln!("error: could not determine history location; pass --state");
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Loads the saved searches into a collection capped by the configuration.
    pub fn load_collection(&self, store: &HistoryStore) -> Result<ResultCollection, ExitCode> {
        let saved = store.load().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        let mut collection = ResultCollection::new(self.config.history.keep_recent_searches);
        collection.restore(saved);
        Ok(collection)
    }

    /// Writes the collection back to the store.
    pub fn save_collection(
        &self,
        store: &HistoryStore,
        collection: &ResultCollection,
    ) -> Result<(), ExitCode> {
        store.save(&collection.serialize()).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Returns HTTP client options from the configuration.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.config.server.timeout(),
            api_token: self.config.server.api_token.clone(),
        }
    }

    /// Returns the configured editor source root.
    pub fn source_root(&self) -> Option<&Path> {
        self.config.editor.source_root.as_deref()
    }
}

/// Parses a user-supplied node path, printing an error on failure.
pub fn parse_node_path(text: &str) -> Result<NodePath, ExitCode> {
    text.parse().map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Looks up a node, printing an error when nothing lives at `path`.
pub fn find_node<'a>(
    collection: &'a ResultCollection,
    path: &NodePath,
) -> Result<&'a Node, ExitCode> {
    collection.get(path).ok_or_else(|| {
        eprintln!("error: no result at {path}");
        eprintln!("Run 'og history' to list saved searches.");
        ExitCode::FAILURE
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
