//! CLI definitions using clap derive API
//!
//! Running without a subcommand patches the workspace. The only
//! subcommands are informational:
//! - version: build information
//! - completions: shell completion scripts

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;

pub use completions::CompletionsArgs;

/// sitepatch - post-processor for converter-generated static sites
#[derive(Parser, Debug)]
#[command(
    name = "sitepatch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Idempotent post-processor for converter-generated bilingual static sites",
    long_about = "sitepatch rewrites the HTML and CSS a document converter emits into a modern, \
                  bilingual site: HTML5 head with social metadata, a download button on every \
                  page, centered figures, and assets restored from git when a converter run \
                  deleted them. Running it again changes nothing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  sitepatch                     \x1b[90m# Patch the site in the current directory\x1b[0m\n   \
                  sitepatch -w site --dry-run   \x1b[90m# Show what would change under site/\x1b[0m\n   \
                  sitepatch -c cv.yaml          \x1b[90m# Use an explicit configuration file\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "SITEPATCH_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file (defaults to sitepatch.yaml in the workspace)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
