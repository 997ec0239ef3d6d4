//! Clap argument definitions for the `og` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "og")]
#[command(about = "OpenGrok search from the terminal")]
#[command(version)]
pub struct Cli {
    /// History file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `og search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with spaces (e.g. `path:net def:connect`)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Restrict to a project (can be specified multiple times)
    #[arg(short = 'p', long = "project")]
    pub projects: Vec<String>,

    /// OpenGrok server URL, overriding the configured one
    #[arg(short = 's', long)]
    pub server: Option<String>,

    /// Show the parsed query and request URL without searching
    #[arg(long)]
    pub explain: bool,

    /// Don't add this search to the history
    #[arg(long)]
    pub no_save: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for commands that address one node.
#[derive(Args, Debug, Clone)]
pub struct NodeCommand {
    /// Node path: `1` is the newest search, `1.2.1.3` its third match in
    /// the first file of the second directory
    pub path: String,
}

/// Arguments for `og show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    #[command(flatten)]
    /// Addressed node.
    pub node: NodeCommand,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `og init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.og.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `og` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the OpenGrok server and save the results
    Search(SearchCommand),

    /// List saved searches, newest first
    History(OutputArgs),

    /// Show the result tree below a node
    Show(ShowCommand),

    /// Print the browser URL and editor location of a node
    Open(NodeCommand),

    /// Remove a saved search, or a directory, file or line from one
    Remove(NodeCommand),

    /// Remove all saved searches
    Clear,

    /// Initialize og configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_collects_words_and_projects() {
        let cli = Cli::try_parse_from([
            "og", "-vv", "search", "path:net", "connect", "-p", "kernel", "--project", "libc",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(cmd.query, vec!["path:net", "connect"]);
        assert_eq!(cmd.projects, vec!["kernel", "libc"]);
        assert!(!cmd.explain);
    }

    #[test]
    fn global_state_after_subcommand() {
        let cli = Cli::try_parse_from(["og", "history", "--state", "/tmp/h.json"]).unwrap();
        assert_eq!(cli.state, Some(PathBuf::from("/tmp/h.json")));
    }

    #[test]
    fn search_requires_query() {
        assert!(Cli::try_parse_from(["og", "search"]).is_err());
    }
}
