//! Implementation of `og open`.

use std::process::ExitCode;

use crate::cli::{
    args::NodeCommand,
    context::{CommandContext, find_node, parse_node_path},
    output::dim,
};

/// Prints where a node can be viewed.
///
/// Every node has a browser URL. Line nodes also print an editor location,
/// resolved against `[editor] source_root` when one is configured.
pub fn run(ctx: &CommandContext, cmd: &NodeCommand) -> ExitCode {
    let path = match parse_node_path(&cmd.path) {
        Ok(path) => path,
        Err(code) => return code,
    };
    let collection = match ctx.store().and_then(|store| ctx.load_collection(&store)) {
        Ok(collection) => collection,
        Err(code) => return code,
    };
    let node = match find_node(&collection, &path) {
        Ok(node) => node,
        Err(code) => return code,
    };

    match node.browser_url() {
        Ok(url) => println!("{url}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if let Some(location) = node.editor_location() {
        match ctx.source_root() {
            Some(root) => println!(
                "{}:{}:{}",
                location.local_path(root).display(),
                location.line_number,
                location.column()
            ),
            None => println!("{location}  {}", dim("(set [editor] source_root for a local path)")),
        }
    }

    ExitCode::SUCCESS
}
