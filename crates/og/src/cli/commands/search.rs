//! Implementation of `og search`.

use std::process::ExitCode;

use og_client::{SearchBackend, SearchClient, search_url};
use og_query::SearchQuery;
use og_tree::{Node, NodePath, build_tree};
use tracing::info;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonNode, dim, format_tree, subheader},
};

/// Runs a search, saves it to the history and prints the result tree.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = match build_query(ctx, cmd) {
        Ok(query) => query,
        Err(code) => return code,
    };

    if cmd.explain {
        return explain(&query);
    }

    let client = match SearchClient::new(&ctx.client_options()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let response = match client.search(&query) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        query = %query,
        matches = response.match_count(),
        files = response.results.len(),
        "search complete"
    );

    let root = build_tree(query, response);
    let rendered = match render(&root, cmd.output.json) {
        Ok(rendered) => rendered,
        Err(code) => return code,
    };

    if !cmd.no_save
        && let Err(code) = save_search(ctx, root)
    {
        return code;
    }

    print!("{rendered}");
    ExitCode::SUCCESS
}

/// Renders a fresh result tree as text or JSON.
fn render(root: &Node, json: bool) -> Result<String, ExitCode> {
    let path = NodePath::root(0);
    if !json {
        return Ok(format_tree(root, &path));
    }
    serde_json::to_string_pretty(&JsonNode::new(root, &path))
        .map(|json| json + "\n")
        .map_err(|e| {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        })
}

/// Parses the query words and applies server and project settings.
///
/// Projects from `--project` come after `project:` clauses, followed by the
/// configured default projects.
fn build_query(ctx: &CommandContext, cmd: &SearchCommand) -> Result<SearchQuery, ExitCode> {
    let text = cmd.query.join(" ");
    let mut query = og_query::parse(&text).map_err(|e| {
        eprintln!("error: invalid search query");
        eprintln!("{e}");
        eprintln!("hint: {}", e.suggestion());
        ExitCode::FAILURE
    })?;

    let server = cmd.server.clone().or_else(|| ctx.config.server.url.clone());
    let Some(server) = server.filter(|s| !s.trim().is_empty()) else {
        eprintln!("error: no OpenGrok server configured");
        eprintln!("Pass --server or set [server] url in .og.toml (see 'og init').");
        return Err(ExitCode::FAILURE);
    };
    query.server = server;

    query.projects.extend(cmd.projects.iter().cloned());
    query
        .projects
        .extend(ctx.config.server.default_projects.iter().cloned());

    Ok(query)
}

/// Prints the canonical query and the request URL without searching.
fn explain(query: &SearchQuery) -> ExitCode {
    println!("{}", subheader("Query:"));
    if query.is_empty() {
        println!("   {}", dim("(empty query)"));
    } else {
        println!("   {query}");
    }
    println!();

    println!("{}", subheader("Request:"));
    match search_url(query) {
        Ok(url) => println!("   GET {url}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Prepends `root` to the saved history and writes it back.
fn save_search(ctx: &CommandContext, root: Node) -> Result<(), ExitCode> {
    let store = ctx.store()?;
    let mut collection = ctx.load_collection(&store)?;
    collection.add(root);
    ctx.save_collection(&store, &collection)
}
