//! Command-line client for OpenGrok code search.
//!
//! `og search` runs a query against an OpenGrok server and keeps the result
//! tree in a local history, so earlier searches can be browsed with `og show`
//! and jumped to with `og open` without asking the server again.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{CommandContext, args::{Cli, Commands}};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    // `init` must work even when an existing config file is broken.
    let ctx = if matches!(cli.command, Commands::Init(_)) {
        CommandContext::load_cwd_only(cli.state)
    } else {
        CommandContext::load(cli.state)
    };

    match ctx {
        Ok(ctx) => cli::commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
