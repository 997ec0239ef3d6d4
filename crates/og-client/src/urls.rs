//! URL construction for the search API and the OpenGrok web UI.

use og_query::{Field, SearchQuery};
use url::Url;

use crate::ClientError;

/// Fields sent as request parameters after the project list.
const REQUEST_FIELDS: [Field; 4] = [Field::Path, Field::Full, Field::Def, Field::Symbol];

/// Returns the server base URL without surrounding whitespace or trailing slashes.
fn base(server: &str) -> Result<&str, ClientError> {
    let trimmed = server.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::MissingServer);
    }
    Ok(trimmed)
}

/// Parses an assembled URL string.
fn parse_url(url: String) -> Result<Url, ClientError> {
    Url::parse(&url).map_err(|source| ClientError::InvalidServerUrl { url, source })
}

/// Drops an empty `?` left behind by a query serializer with nothing appended.
fn drop_empty_query(url: &mut Url) {
    if url.query() == Some("") {
        url.set_query(None);
    }
}

/// Builds the `/api/v1/search` request URL for `query`.
///
/// Emits one `projects` parameter per project, then one `path`, `full`, `def`
/// and `symbol` parameter per stored value. Fields without values produce no
/// parameter at all.
pub fn search_url(query: &SearchQuery) -> Result<Url, ClientError> {
    let mut url = parse_url(format!("{}/api/v1/search", base(&query.server)?))?;
    {
        let mut pairs = url.query_pairs_mut();
        for project in &query.projects {
            pairs.append_pair("projects", project);
        }
        for field in REQUEST_FIELDS {
            for value in query.values(field) {
                pairs.append_pair(field.name(), value);
            }
        }
    }
    drop_empty_query(&mut url);
    Ok(url)
}

/// Builds the web UI search page URL that shows the same results as `query`.
///
/// The web UI takes a single value per field, so multiple values are joined
/// with spaces. `def` maps to `defs` and `symbol` to `refs`.
pub fn result_url(query: &SearchQuery) -> Result<Url, ClientError> {
    let mut url = parse_url(format!("{}/search", base(&query.server)?))?;
    {
        let mut pairs = url.query_pairs_mut();
        for project in &query.projects {
            pairs.append_pair("project", project);
        }
        for (field, param) in [
            (Field::Full, "full"),
            (Field::Def, "defs"),
            (Field::Symbol, "refs"),
            (Field::Path, "path"),
        ] {
            let values = query.values(field);
            if !values.is_empty() {
                pairs.append_pair(param, &values.join(" "));
            }
        }
    }
    drop_empty_query(&mut url);
    Ok(url)
}

/// Returns `path` as an absolute xref path, mapping `.` to the root.
fn xref_path(path: &str) -> String {
    match path {
        "" | "." => String::new(),
        p if p.starts_with('/') => p.to_string(),
        p => format!("/{p}"),
    }
}

/// Builds the cross-reference URL of a directory.
pub fn directory_url(server: &str, directory: &str) -> Result<Url, ClientError> {
    let path = xref_path(directory);
    let path = path.trim_end_matches('/');
    parse_url(format!("{}/xref{path}/", base(server)?))
}

/// Builds the cross-reference URL of a file.
pub fn file_url(server: &str, path: &str) -> Result<Url, ClientError> {
    parse_url(format!("{}/xref{}", base(server)?, xref_path(path)))
}

/// Builds the cross-reference URL of a line within a file.
pub fn line_url(server: &str, path: &str, line_number: u32) -> Result<Url, ClientError> {
    let mut url = file_url(server, path)?;
    url.set_fragment(Some(&line_number.to_string()));
    Ok(url)
}
