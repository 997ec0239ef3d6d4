//! OpenGrok search API client for og.
//!
//! This crate provides:
//! - The response model of the `/api/v1/search` endpoint
//! - Request URL shaping from a [`SearchQuery`](og_query::SearchQuery)
//! - A blocking HTTP client behind the [`SearchBackend`] trait
//! - OpenGrok web UI URL conventions for opening results in a browser
//!
//! # Example
//!
//! ```no_run
//! use og_client::{ClientOptions, SearchBackend, SearchClient};
//!
//! let mut query = og_query::parse("def:alloc_pages").unwrap();
//! query.server = "https://opengrok.example.com/source".into();
//!
//! let client = SearchClient::new(&ClientOptions::default()).unwrap();
//! let response = client.search(&query).unwrap();
//! println!("{} matches", response.match_count());
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod response;
mod urls;

pub use client::{ClientOptions, SearchBackend, SearchClient};
pub use error::ClientError;
pub use response::{SearchResponseBody, SearchResult};
pub use url::Url;
pub use urls::{directory_url, file_url, line_url, result_url, search_url};
