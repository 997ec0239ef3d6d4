//! Result trees for OpenGrok searches.
//!
//! A search response is turned into a four-level tree: one `Result` root per
//! executed query, `Directory` nodes for the parent directories of matched
//! files, `File` nodes, and `Line` nodes carrying the cleaned line text and
//! highlight ranges. Roots live in a [`ResultCollection`], most recent first,
//! which can be saved to disk through a [`HistoryStore`] and rebuilt later.
//!
//! # Example
//!
//! ```
//! use og_client::SearchResponseBody;
//! use og_tree::{ResultCollection, build_tree};
//!
//! let query = og_query::parse("def:main").unwrap();
//! let mut collection = ResultCollection::new(10);
//! collection.add(build_tree(query, SearchResponseBody::default()));
//! assert_eq!(collection.roots()[0].label(), "def:main (0 matches)");
//! ```

#![warn(missing_docs)]

mod build;
mod collection;
mod error;
mod highlight;
mod node;
mod store;

pub use build::{build_tree, directory_of};
pub use collection::{ResultCollection, SavedSearch};
pub use error::{NodePathError, StoreError};
pub use highlight::{
    HighlightedLine, extract_highlights, first_match_range, highlight_ranges, strip_markers,
};
pub use node::{EditorLocation, LineMatch, Node, NodeKind, NodePath};
pub use store::{HISTORY_FILENAME, HistoryStore};
