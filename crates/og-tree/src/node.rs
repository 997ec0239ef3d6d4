//! Result tree nodes and node addressing.
//!
//! A tree has four levels: a `Result` root per executed query, one
//! `Directory` per parent directory of a matched file, one `File` per matched
//! file and one `Line` per match. Parents own their children. A node never
//! points back at its parent; callers address nodes with a [`NodePath`] and
//! get the parent from [`NodePath::parent`].

use std::{
    fmt,
    ops::Range,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use og_client::{
    ClientError, SearchResponseBody, SearchResult, Url, directory_url, file_url, line_url,
    result_url,
};
use og_query::SearchQuery;

use crate::error::NodePathError;

/// Address of a node: child indices starting at the collection's root list.
///
/// The textual form is 1-based and dot separated (`2.1.3`), the form users
/// type on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Creates a path from 0-based indices.
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Path of the top-level root at `index`.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Returns the path of this node's child at `index`.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Returns the parent path, or `None` for top-level roots.
    pub fn parent(&self) -> Option<Self> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// Returns the 0-based indices.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of levels below the collection (1 for a root).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this addresses a top-level root.
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| (i + 1).to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

impl FromStr for NodePath {
    type Err = NodePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NodePathError::Empty);
        }

        s.split('.')
            .map(|part| match part.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n - 1),
                _ => Err(NodePathError::InvalidComponent(part.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// A matched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Path of the file containing the match.
    pub file_path: String,
    /// Position of the match in the file's result list.
    pub index: usize,
    /// 1-based line number, 0 if the server sent an unparseable value.
    pub line_number: u32,
    /// Cleaned line text.
    pub label: String,
    /// `"{tag}, line {n}"` or `"line {n}"`.
    pub annotation: String,
    /// First match span in the untrimmed line.
    pub first_match: Option<Range<usize>>,
    /// All match spans within `label`.
    pub highlights: Vec<Range<usize>>,
}

/// Kind-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root for one executed query.
    Result {
        /// Canonical query text and match count.
        summary: String,
    },
    /// A directory containing matched files.
    Directory {
        /// Directory path.
        path: String,
    },
    /// A matched file.
    File {
        /// Full file path.
        path: String,
    },
    /// A matched line.
    Line(LineMatch),
}

/// A node of the result tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Query that produced this tree.
    query: Arc<SearchQuery>,
    /// Response this tree was built from.
    response: Arc<SearchResponseBody>,
    /// Kind-specific data.
    kind: NodeKind,
    /// Children in construction order.
    children: Vec<Self>,
}

impl Node {
    /// Creates a childless node.
    pub(crate) fn new(
        query: Arc<SearchQuery>,
        response: Arc<SearchResponseBody>,
        kind: NodeKind,
    ) -> Self {
        Self {
            query,
            response,
            kind,
            children: Vec::new(),
        }
    }

    /// Appends a child and returns its index.
    pub(crate) fn push_child(&mut self, child: Self) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Returns the child at `index` mutably.
    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }

    /// Returns the query this tree was built for.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Returns the response this tree was built from.
    pub fn response(&self) -> &SearchResponseBody {
        &self.response
    }

    /// Returns the kind-specific payload.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the children in construction order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the descendant at the given relative indices.
    ///
    /// An empty slice addresses `self`.
    pub fn descendant(&self, indices: &[usize]) -> Option<&Self> {
        indices
            .iter()
            .try_fold(self, |node, &i| node.children.get(i))
    }

    /// Returns the line payload if this is a line node.
    pub fn line(&self) -> Option<&LineMatch> {
        match &self.kind {
            NodeKind::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Returns the text shown for this node.
    pub fn label(&self) -> &str {
        match &self.kind {
            NodeKind::Result { summary } => summary,
            NodeKind::Directory { path } => path,
            NodeKind::File { path } => file_name(path),
            NodeKind::Line(line) => &line.label,
        }
    }

    /// Returns secondary text shown next to the label, if any.
    pub fn description(&self) -> Option<&str> {
        self.line().map(|line| line.annotation.as_str())
    }

    /// Looks up the raw server match behind a line node.
    pub fn source_match(&self) -> Option<&SearchResult> {
        let line = self.line()?;
        self.response.results.get(&line.file_path)?.get(line.index)
    }

    /// Returns the OpenGrok web UI address for this node.
    pub fn browser_url(&self) -> Result<Url, ClientError> {
        let server = &self.query.server;
        match &self.kind {
            NodeKind::Result { .. } => result_url(&self.query),
            NodeKind::Directory { path } => directory_url(server, path),
            NodeKind::File { path } => file_url(server, path),
            NodeKind::Line(line) => line_url(server, &line.file_path, line.line_number),
        }
    }

    /// Returns where to open a line node in an editor.
    pub fn editor_location(&self) -> Option<EditorLocation> {
        self.line().map(|line| EditorLocation {
            path: line.file_path.clone(),
            line_number: line.line_number,
            range: line.first_match.clone(),
        })
    }
}

/// Returns the final path segment.
fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Position of a match for opening in an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLocation {
    /// Repository path of the file.
    pub path: String,
    /// 1-based line number.
    pub line_number: u32,
    /// Char span of the first match within the source line.
    pub range: Option<Range<usize>>,
}

impl EditorLocation {
    /// 1-based column of the match start, 1 when unknown.
    pub fn column(&self) -> usize {
        self.range.as_ref().map_or(1, |range| range.start + 1)
    }

    /// Resolves the repository path against a local checkout.
    pub fn local_path(&self, source_root: &Path) -> PathBuf {
        source_root.join(self.path.trim_start_matches('/'))
    }
}

impl fmt::Display for EditorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line_number, self.column())
    }
}
