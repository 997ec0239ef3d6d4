//! Persistence of the saved-search list.
//!
//! The history file is JSON holding the query/response pair of every saved
//! search, newest first. Trees are rebuilt from it on load.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{collection::SavedSearch, error::StoreError};

/// File name of the history file inside the data directory.
pub const HISTORY_FILENAME: &str = "history.json";

/// Format version written to the history file.
const HISTORY_VERSION: u32 = 1;

/// On-disk layout of the history file.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    /// Format version.
    version: u32,
    /// Saved searches, newest first.
    #[serde(default)]
    searches: Vec<SavedSearch>,
}

/// Borrowed form of [`HistoryFile`] for writing.
#[derive(Serialize)]
struct HistoryFileRef<'a> {
    /// Format version.
    version: u32,
    /// Saved searches, newest first.
    searches: &'a [SavedSearch],
}

/// Reads and writes the history file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    /// Location of the history file.
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the platform default history location.
    ///
    /// This is `history.json` in the og data directory, for example
    /// `~/.local/share/og/history.json` on Linux. Returns `None` if no home
    /// directory can be determined.
    pub fn default_location() -> Option<PathBuf> {
        ProjectDirs::from("", "", "og").map(|dirs| dirs.data_dir().join(HISTORY_FILENAME))
    }

    /// Returns the history file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved searches.
    ///
    /// Returns an empty list if the file doesn't exist.
    pub fn load(&self) -> Result<Vec<SavedSearch>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let file: HistoryFile =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if file.version != HISTORY_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: self.path.clone(),
                version: file.version,
            });
        }

        debug!(
            path = %self.path.display(),
            searches = file.searches.len(),
            "loaded history"
        );
        Ok(file.searches)
    }

    /// Writes the saved searches, replacing the previous file.
    ///
    /// Creates parent directories if they don't exist. The file is written
    /// next to its destination and renamed into place, so readers never see a
    /// partial file.
    pub fn save(&self, searches: &[SavedSearch]) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = serde_json::to_string_pretty(&HistoryFileRef {
            version: HISTORY_VERSION,
            searches,
        })
        .map_err(StoreError::Encode)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;

        debug!(
            path = %self.path.display(),
            searches = searches.len(),
            "saved history"
        );
        Ok(())
    }
}
