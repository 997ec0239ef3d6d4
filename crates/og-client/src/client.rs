//! Blocking HTTP client for the search endpoint.

use std::{fmt, time::Duration};

use og_query::SearchQuery;
use reqwest::{blocking::Client, header::CONTENT_TYPE};
use tracing::debug;

use crate::{ClientError, SearchResponseBody, urls::search_url};

/// Something that can execute a search query.
///
/// Hosts depend on this trait rather than on [`SearchClient`] so that a
/// different transport can be substituted.
pub trait SearchBackend {
    /// Runs `query` against the server named in `query.server`.
    fn search(&self, query: &SearchQuery) -> Result<SearchResponseBody, ClientError>;
}

/// Transport settings for [`SearchClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Request timeout. Uses the HTTP client default when unset.
    pub timeout: Option<Duration>,
    /// Bearer token sent with every request.
    pub api_token: Option<String>,
}

/// Blocking client for `GET /api/v1/search`.
#[derive(Clone)]
pub struct SearchClient {
    /// Underlying HTTP client.
    http: Client,
    /// Optional bearer token.
    api_token: Option<String>,
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("authenticated", &self.api_token.is_some())
            .finish_non_exhaustive()
    }
}

impl SearchClient {
    /// Creates a client with the given transport settings.
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(concat!("og/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            http,
            api_token: options.api_token.clone().filter(|t| !t.is_empty()),
        })
    }
}

impl SearchBackend for SearchClient {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponseBody, ClientError> {
        let url = search_url(query)?;
        debug!(%url, "GET");

        let mut request = self
            .http
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| ClientError::Http {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body: SearchResponseBody = response.json().map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })?;

        debug!(
            matches = body.match_count(),
            result_count = body.result_count,
            time = body.time,
            "search complete"
        );
        Ok(body)
    }
}
