//! Implementation of `og check`.

use std::process::ExitCode;

use og_config::{ConfigScope, ConfigWarning};
use og_highlight::{dim, header, success, warning};

use crate::cli::context::CommandContext;

/// Validates configuration and the history file.
///
/// Exits with failure when any warning is reported.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    println!("{}", header("Config files:"));
    if config.files.is_empty() {
        println!("  {}", dim("(none found; run 'og init' to create one)"));
    }
    for path in &config.files {
        println!("  {} {}", path.display(), dim(&format!("[{}]", ConfigScope::of(path))));
    }
    println!();

    println!("{}", header("Server:"));
    match (&config.server.url, &config.server_url_source) {
        (Some(url), Some(source)) => {
            println!("  {url} {}", dim(&format!("(from {})", source.display())));
        }
        (Some(url), None) => println!("  {url}"),
        (None, _) => println!("  {}", dim("(not set)")),
    }
    if !config.server.default_projects.is_empty() {
        println!("  projects: {}", config.server.default_projects.join(", "));
    }
    println!();

    println!("{}", header("History:"));
    let history_ok = match ctx.store() {
        Ok(store) => match store.load() {
            Ok(saved) => {
                println!("  {} [{} saved]", store.path().display(), saved.len());
                true
            }
            Err(e) => {
                println!("  {} {}", store.path().display(), warning("[unreadable]"));
                println!("  {}", dim(&e.to_string()));
                false
            }
        },
        Err(_) => false,
    };
    println!();

    let warnings = config.validate();
    if warnings.is_empty() && history_ok {
        println!("{}", success("No issues found."));
        return ExitCode::SUCCESS;
    }

    if !warnings.is_empty() {
        println!("{}", header(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("  - {}", warning(&w.to_string()));
        }
        println!();
        print_hints(&warnings);
    }

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints = Vec::new();

    for w in warnings {
        let hint = match w {
            ConfigWarning::ServerMissing => {
                "Set [server] url in .og.toml, or pass --server to 'og search'."
            }
            ConfigWarning::ServerNotHttp { .. } => {
                "The server url must start with http:// or https://."
            }
            ConfigWarning::SourceRootMissing { .. }
            | ConfigWarning::SourceRootNotDirectory { .. } => {
                "Point [editor] source_root at a local checkout of the indexed sources."
            }
        };
        if !hints.contains(&hint) {
            hints.push(hint);
        }
    }

    if hints.is_empty() {
        return;
    }

    println!("Hints:");
    for hint in hints {
        println!("  {hint}");
    }
}
