//! Implementation of `og show`.

use std::process::ExitCode;

use crate::cli::{
    args::ShowCommand,
    context::{CommandContext, find_node, parse_node_path},
    output::{JsonNode, format_tree, print_json},
};

/// Prints the saved result tree below a node.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let path = match parse_node_path(&cmd.node.path) {
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

    if cmd.output.json {
        return print_json(&JsonNode::new(node, &path));
    }

    print!("{}", format_tree(node, &path));
    ExitCode::SUCCESS
}
