//! Implementation of `og history`.

use std::process::ExitCode;

use crate::cli::{
    args::OutputArgs,
    context::CommandContext,
    output::{print_history, print_history_json},
};

/// Lists the saved searches, newest first.
pub fn run(ctx: &CommandContext, output: &OutputArgs) -> ExitCode {
    let collection = match ctx.store().and_then(|store| ctx.load_collection(&store)) {
        Ok(collection) => collection,
        Err(code) => return code,
    };

    if output.json {
        return print_history_json(&collection);
    }

    print_history(&collection);
    ExitCode::SUCCESS
}
