//! Implementation of `og clear`.

use std::process::ExitCode;

use og_tree::ResultCollection;

use crate::cli::context::CommandContext;

/// Removes every saved search.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    // Not loaded first: a corrupt history file can still be cleared.
    let mut collection = ResultCollection::new(ctx.config.history.keep_recent_searches);
    collection.clear();
    if let Err(code) = ctx.save_collection(&store, &collection) {
        return code;
    }

    println!("Cleared history in {}", store.path().display());
    ExitCode::SUCCESS
}
