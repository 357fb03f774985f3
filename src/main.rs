//! sitepatch - post-processor for converter-generated static sites
//!
//! Rewrites the HTML and CSS of a bilingual document-converter output into a
//! modern site, and restores files a converter run deleted from git history.
//! Every patch is guarded by a presence check, so repeated runs are no-ops.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod config;
mod engine;
mod error;
mod git;
mod patch;
mod path_utils;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::patch::PatchOptions;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::patch::run(PatchOptions {
            workspace: cli.workspace,
            config: cli.config,
            verbose: cli.verbose,
            dry_run: cli.dry_run,
        }),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
