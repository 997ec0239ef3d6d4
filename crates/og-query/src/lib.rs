//! Query parsing and formatting for OpenGrok searches.
//!
//! The query mini-language is free text made of whitespace-separated clauses:
//!
//! - **Fields**: `path:src/net`, `full:socket`, `def:connect`, `symbol:Buffer`
//! - **Projects**: `project:kernel` - restrict the search to a project
//! - **Bare words**: `Buffer` - shorthand for `symbol:Buffer`
//! - **Quoted values**: `full:"hello world"` - values containing spaces
//!
//! Clauses targeting the same field accumulate.
//!
//! # Example
//!
//! ```
//! use og_query::parse;
//!
//! let query = parse("path:drivers full:\"dma buffer\" alloc_pages").unwrap();
//! assert_eq!(query.path, vec!["drivers"]);
//! assert_eq!(query.full, vec!["\"dma buffer\""]);
//! assert_eq!(query.symbol, vec!["alloc_pages"]);
//! ```

#![warn(missing_docs)]

mod error;
mod parser;
mod query;

pub use error::QueryError;
pub use parser::parse;
pub use query::{Field, SearchQuery};
