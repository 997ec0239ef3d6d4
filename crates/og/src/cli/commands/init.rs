//! Implementation of `og init`.

use std::{fs, path::PathBuf, process::ExitCode};

use og_config::{CONFIG_FILENAME, ConfigScope, global_config_path, init_template};
use og_highlight::{Highlighter, dim, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a starter `.og.toml` with every setting commented out.
///
/// Running it in the home directory, or with `--global`, writes the per-user
/// file, which also carries the history and editor sections.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some((scope, config_path)) = target(ctx, cmd) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = init_template(scope);
    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {scope} config {}", config_path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    print!("{}", Highlighter::new().highlight_toml(&template));
    println!();
    println!("{}", dim("Set [server] url, then run 'og check'."));

    ExitCode::SUCCESS
}

/// Picks the scope and file `init` writes to.
fn target(ctx: &CommandContext, cmd: &InitCommand) -> Option<(ConfigScope, PathBuf)> {
    let local = ctx.cwd.join(CONFIG_FILENAME);
    if cmd.global || ConfigScope::of(&local) == ConfigScope::Global {
        return Some((ConfigScope::Global, global_config_path()?));
    }
    Some((ConfigScope::Local, local))
}
