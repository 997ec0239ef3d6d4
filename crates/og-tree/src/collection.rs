//! The ordered collection of result trees shown to the user.

use std::fmt;

use og_client::SearchResponseBody;
use og_query::SearchQuery;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    build::{build_tree, directory_of},
    node::{Node, NodeKind, NodePath},
};

/// The persisted form of one result tree.
///
/// Trees are not stored; they are rebuilt from the query and response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    /// Query that was executed.
    pub query: SearchQuery,
    /// Response the server returned.
    pub response: SearchResponseBody,
}

/// Callback invoked after every change to the collection.
type Listener = Box<dyn Fn()>;

/// Result trees, most recent first.
///
/// Listeners get a bare "something changed" signal and are expected to re-read
/// the collection.
#[derive(Default)]
pub struct ResultCollection {
    /// Top-level `Result` nodes, newest first.
    roots: Vec<Node>,
    /// Maximum number of roots kept, 0 for no limit.
    keep_recent_searches: usize,
    /// Change listeners.
    listeners: Vec<Listener>,
}

impl fmt::Debug for ResultCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCollection")
            .field("roots", &self.roots.len())
            .field("keep_recent_searches", &self.keep_recent_searches)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ResultCollection {
    /// Creates an empty collection keeping at most `keep_recent_searches` roots.
    pub fn new(keep_recent_searches: usize) -> Self {
        Self {
            keep_recent_searches,
            ..Self::default()
        }
    }

    /// Returns the retention cap, 0 meaning unlimited.
    pub fn keep_recent_searches(&self) -> usize {
        self.keep_recent_searches
    }

    /// Changes the retention cap, dropping the oldest roots beyond it.
    pub fn set_keep_recent_searches(&mut self, keep_recent_searches: usize) {
        self.keep_recent_searches = keep_recent_searches;
        if self.enforce_cap() {
            self.notify();
        }
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the roots, newest first.
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if there are no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the node at `path`.
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let (first, rest) = path.indices().split_first()?;
        self.roots.get(*first)?.descendant(rest)
    }

    /// Adds a root in front, then drops the oldest roots beyond the cap.
    pub fn add(&mut self, root: Node) {
        self.roots.insert(0, root);
        self.enforce_cap();
        self.notify();
    }

    /// Detaches the node at `path` and returns it.
    ///
    /// A top-level path removes a root. Any other path prunes the matching
    /// entries from the root's response and rebuilds the root, so the saved
    /// form keeps agreeing with what is visible:
    ///
    /// - a line leaves its file and sibling lines in place
    /// - a file or directory also takes along any directory left empty
    ///
    /// Returns `None`, without notifying, if nothing lives at `path`.
    pub fn remove(&mut self, path: &NodePath) -> Option<Node> {
        let (&first, rest) = path.indices().split_first()?;
        let removed = if rest.is_empty() {
            (first < self.roots.len()).then(|| self.roots.remove(first))?
        } else {
            let root = self.roots.get_mut(first)?;
            let removed = root.descendant(rest)?.clone();
            let mut response = root.response().clone();
            prune_response(&mut response, removed.kind());
            *root = build_tree(root.query().clone(), response);
            removed
        };

        debug!(%path, "removed node");
        self.notify();
        Some(removed)
    }

    /// Removes every root.
    pub fn clear(&mut self) {
        self.roots.clear();
        self.notify();
    }

    /// Returns the query/response pair of every root, newest first.
    pub fn serialize(&self) -> Vec<SavedSearch> {
        self.roots
            .iter()
            .map(|root| SavedSearch {
                query: root.query().clone(),
                response: root.response().clone(),
            })
            .collect()
    }

    /// Replaces the contents with trees rebuilt from `saved`, in order.
    ///
    /// The retention cap applies to the restored list as well.
    pub fn restore(&mut self, saved: Vec<SavedSearch>) {
        self.roots = saved
            .into_iter()
            .map(|search| build_tree(search.query, search.response))
            .collect();
        self.enforce_cap();
        self.notify();
    }

    /// Returns every node with its path, depth first, roots in order.
    pub fn walk(&self) -> Vec<(NodePath, &Node)> {
        let mut out = Vec::new();
        for (index, root) in self.roots.iter().enumerate() {
            walk_node(NodePath::root(index), root, &mut out);
        }
        out
    }

    /// Truncates to the retention cap, returning true if anything was dropped.
    fn enforce_cap(&mut self) -> bool {
        if self.keep_recent_searches == 0 || self.roots.len() <= self.keep_recent_searches {
            return false;
        }
        self.roots.truncate(self.keep_recent_searches);
        true
    }

    /// Signals every listener.
    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

/// Drops the server matches behind a directory, file or line node.
fn prune_response(response: &mut SearchResponseBody, kind: &NodeKind) {
    match kind {
        NodeKind::Result { .. } => {}
        NodeKind::Directory { path } => {
            response
                .results
                .retain(|file, _| directory_of(file) != path.as_str());
        }
        NodeKind::File { path } => {
            response.results.remove(path);
        }
        NodeKind::Line(line) => {
            if let Some(matches) = response.results.get_mut(&line.file_path)
                && line.index < matches.len()
            {
                matches.remove(line.index);
            }
        }
    }
}

/// Pushes `node` and its descendants onto `out` in pre-order.
fn walk_node<'a>(path: NodePath, node: &'a Node, out: &mut Vec<(NodePath, &'a Node)>) {
    let children: Vec<NodePath> = (0..node.children().len())
        .map(|index| path.child(index))
        .collect();
    out.push((path, node));
    for (child_path, child) in children.into_iter().zip(node.children()) {
        walk_node(child_path, child, out);
    }
}
