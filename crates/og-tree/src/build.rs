//! Result tree construction.

use std::{collections::HashMap, sync::Arc};

use og_client::{SearchResponseBody, SearchResult};
use og_query::SearchQuery;
use tracing::{debug, warn};

use crate::{
    highlight::{HighlightedLine, extract_highlights},
    node::{LineMatch, Node, NodeKind},
};

/// Builds the result tree for one executed query.
///
/// Files are visited in ascending path order. Each file hangs off the
/// directory node for its parent directory, created on first use, and its
/// lines keep the order the server returned them in.
pub fn build_tree(query: SearchQuery, response: SearchResponseBody) -> Node {
    let query = Arc::new(query);
    let response = Arc::new(response);

    let summary = format!(
        "{} ({} matches)",
        query.canonical(),
        response.match_count()
    );
    let mut root = Node::new(
        Arc::clone(&query),
        Arc::clone(&response),
        NodeKind::Result { summary },
    );

    // Directory path -> index among the root's children.
    let mut directories: HashMap<&str, usize> = HashMap::new();

    for (file_path, matches) in &response.results {
        let directory = directory_of(file_path);
        let dir_index = *directories.entry(directory).or_insert_with(|| {
            root.push_child(Node::new(
                Arc::clone(&query),
                Arc::clone(&response),
                NodeKind::Directory {
                    path: directory.to_string(),
                },
            ))
        });

        let mut file = Node::new(
            Arc::clone(&query),
            Arc::clone(&response),
            NodeKind::File {
                path: file_path.clone(),
            },
        );
        for (index, result) in matches.iter().enumerate() {
            file.push_child(Node::new(
                Arc::clone(&query),
                Arc::clone(&response),
                NodeKind::Line(line_match(file_path, index, result)),
            ));
        }

        if let Some(dir) = root.child_mut(dir_index) {
            dir.push_child(file);
        }
    }

    debug!(
        query = %query,
        directories = directories.len(),
        files = response.results.len(),
        matches = response.match_count(),
        "built result tree"
    );
    root
}

/// Returns `path` without its final segment.
///
/// Mirrors `dirname`: `a/b/c.rs` gives `a/b`, `/c.rs` gives `/` and a bare
/// file name gives `.`.
pub fn directory_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Builds the payload of one line node.
fn line_match(file_path: &str, index: usize, result: &SearchResult) -> LineMatch {
    let HighlightedLine {
        label,
        first_match,
        highlights,
    } = extract_highlights(&result.line);

    let line_number = result.line_number.trim().parse::<u32>().unwrap_or_else(|_| {
        warn!(
            file = file_path,
            line_number = %result.line_number,
            "server sent an invalid line number"
        );
        0
    });

    let annotation = match result.tag() {
        Some(tag) => format!("{tag}, line {line_number}"),
        None => format!("line {line_number}"),
    };

    LineMatch {
        file_path: file_path.to_string(),
        index,
        line_number,
        label,
        annotation,
        first_match,
        highlights,
    }
}
