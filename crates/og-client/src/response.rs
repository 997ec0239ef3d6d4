//! Response model of the OpenGrok search API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Body returned by `GET /api/v1/search`.
///
/// Every field falls back to its default when the server omits it or sends
/// `null`, so a malformed response reads as an empty result set.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResponseBody {
    /// Server-side search latency in milliseconds.
    #[serde_as(as = "DefaultOnNull")]
    pub time: f64,
    /// Total match count reported by the server.
    #[serde_as(as = "DefaultOnNull")]
    pub result_count: u64,
    /// Index of the first returned document.
    #[serde_as(as = "DefaultOnNull")]
    pub start_document: u64,
    /// Index one past the last returned document.
    #[serde_as(as = "DefaultOnNull")]
    pub end_document: u64,
    /// Matches keyed by repository-relative file path, in path order.
    #[serde_as(as = "DefaultOnNull")]
    pub results: BTreeMap<String, Vec<SearchResult>>,
}

impl SearchResponseBody {
    /// Counts the line matches actually present in `results`.
    ///
    /// This can differ from `result_count`, which the server computes
    /// independently.
    pub fn match_count(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }
}

/// A single line-level match.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    /// Matched source line, HTML-escaped, with `<b>` markup around matches.
    #[serde_as(as = "DefaultOnNull")]
    pub line: String,
    /// 1-based line number as decimal text.
    #[serde_as(as = "DefaultOnNull")]
    pub line_number: String,
    /// Optional symbol tag for the line.
    pub tag: Option<String>,
}

impl SearchResult {
    /// Returns the tag if present and non-empty.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }
}
