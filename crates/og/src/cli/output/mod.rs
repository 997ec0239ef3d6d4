//! Rendering and JSON serialization for CLI output.

use std::{ops::Range, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
pub use og_highlight::{dim, header, subheader};
use og_highlight::{bold, emphasize_ranges};
use og_tree::{Node, NodeKind, NodePath, ResultCollection};
use serde::Serialize;

/// JSON form of a tree node.
#[derive(Serialize)]
pub struct JsonNode<'a> {
    /// 1-based dotted node path.
    path: String,
    /// `result`, `directory`, `file` or `line`.
    kind: &'static str,
    /// Display label.
    label: &'a str,
    /// Secondary text for line nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    /// Full path for directory and file nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    /// Line number for line nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    line_number: Option<u32>,
    /// Highlighted char ranges within `label`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<Range<usize>>,
    /// OpenGrok web UI address.
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
}

impl<'a> JsonNode<'a> {
    /// Converts `node` and its descendants.
    pub fn new(node: &'a Node, path: &NodePath) -> Self {
        let (file, line_number, highlights) = match node.kind() {
            NodeKind::Result { .. } => (None, None, Vec::new()),
            NodeKind::Directory { path } | NodeKind::File { path } => {
                (Some(path.as_str()), None, Vec::new())
            }
            NodeKind::Line(line) => (
                Some(line.file_path.as_str()),
                Some(line.line_number),
                line.highlights.clone(),
            ),
        };

        Self {
            path: path.to_string(),
            kind: kind_name(node.kind()),
            label: node.label(),
            description: node.description(),
            file,
            line_number,
            highlights,
            url: node.browser_url().ok().map(|url| url.to_string()),
            children: node
                .children()
                .iter()
                .enumerate()
                .map(|(i, child)| Self::new(child, &path.child(i)))
                .collect(),
        }
    }
}

/// JSON row of `og history`.
#[derive(Serialize)]
struct JsonHistoryEntry<'a> {
    /// 1-based node path of the search.
    path: String,
    /// Canonical query text.
    query: String,
    /// Server the search ran against.
    server: &'a str,
    /// Projects searched.
    projects: &'a [String],
    /// Number of matched lines.
    matches: usize,
    /// Number of matched files.
    files: usize,
}

/// Returns the lowercase name of a node kind.
pub fn kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Result { .. } => "result",
        NodeKind::Directory { .. } => "directory",
        NodeKind::File { .. } => "file",
        NodeKind::Line(_) => "line",
    }
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders one node as a single line without its children.
pub fn format_node(node: &Node, path: &NodePath) -> String {
    let label = match node.kind() {
        NodeKind::Result { .. } => header(node.label()),
        NodeKind::Directory { .. } => bold(node.label()),
        NodeKind::File { .. } => node.label().to_string(),
        NodeKind::Line(line) => emphasize_ranges(&line.label, &line.highlights),
    };

    let mut out = format!("{} {label}", dim(&path.to_string()));
    if let Some(description) = node.description() {
        out.push_str("  ");
        out.push_str(&dim(description));
    }
    out
}

/// Renders `node` and its descendants, indented by depth below `path`.
pub fn format_tree(node: &Node, path: &NodePath) -> String {
    let mut out = String::new();
    write_tree(&mut out, node, path, 0);
    out
}

/// Appends one line per node in pre-order.
fn write_tree(out: &mut String, node: &Node, path: &NodePath, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format_node(node, path));
    out.push('\n');
    for (i, child) in node.children().iter().enumerate() {
        write_tree(out, child, &path.child(i), depth + 1);
    }
}

/// Prints the saved searches as a table, newest first.
pub fn print_history(collection: &ResultCollection) {
    if collection.is_empty() {
        println!("{}", dim("No saved searches."));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Query", "Projects", "Matches", "Files"]);

    for (i, root) in collection.roots().iter().enumerate() {
        let query = root.query();
        let response = root.response();
        table.add_row(vec![
            Cell::new(NodePath::root(i)),
            Cell::new(query.canonical()),
            Cell::new(query.projects.join(", ")),
            Cell::new(response.match_count()),
            Cell::new(response.results.len()),
        ]);
    }

    println!("{table}");
}

/// Prints the saved searches as JSON, newest first.
pub fn print_history_json(collection: &ResultCollection) -> ExitCode {
    let entries: Vec<JsonHistoryEntry<'_>> = collection
        .roots()
        .iter()
        .enumerate()
        .map(|(i, root)| JsonHistoryEntry {
            path: NodePath::root(i).to_string(),
            query: root.query().canonical(),
            server: &root.query().server,
            projects: &root.query().projects,
            matches: root.response().match_count(),
            files: root.response().results.len(),
        })
        .collect();
    print_json(&entries)
}
