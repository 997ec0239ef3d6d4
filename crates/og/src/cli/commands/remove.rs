//! Implementation of `og remove`.

use std::process::ExitCode;

use crate::cli::{
    args::NodeCommand,
    context::{CommandContext, parse_node_path},
    output::format_node,
};

/// Removes a saved search, or a directory, file or line from one.
///
/// Removing below the top level rewrites the saved response of that search,
/// so the node stays gone in later `show` and `history` output.
pub fn run(ctx: &CommandContext, cmd: &NodeCommand) -> ExitCode {
    let path = match parse_node_path(&cmd.path) {
        Ok(path) => path,
        Err(code) => return code,
    };

    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let mut collection = match ctx.load_collection(&store) {
        Ok(collection) => collection,
        Err(code) => return code,
    };

    let Some(removed) = collection.remove(&path) else {
        eprintln!("error: no result at {path}");
        eprintln!("Run 'og history' to list saved searches.");
        return ExitCode::FAILURE;
    };

    if let Err(code) = ctx.save_collection(&store, &collection) {
        return code;
    }

    println!("Removed {}", format_node(&removed, &path));
    ExitCode::SUCCESS
}
