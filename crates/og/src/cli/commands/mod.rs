//! Command implementations and dispatch.

pub mod check;
pub mod clear;
pub mod config;
pub mod history;
pub mod init;
pub mod open;
pub mod remove;
pub mod search;
pub mod show;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::History(output) => history::run(ctx, &output),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Open(cmd) => open::run(ctx, &cmd),
        Commands::Remove(cmd) => remove::run(ctx, &cmd),
        Commands::Clear => clear::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
