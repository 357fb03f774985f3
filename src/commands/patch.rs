//! Patch command implementation
//!
//! The default action: load configuration, build the catalog and run the
//! engine over it with console output.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::engine::{Engine, RunSummary};
use crate::error::{Result, SitepatchError};
use crate::ui::ConsoleReporter;

/// Options of one patch run, taken from the global CLI flags
#[derive(Debug, Default)]
pub struct PatchOptions {
    pub workspace: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub dry_run: bool,
}

/// Run patch command
pub fn run(options: PatchOptions) -> Result<()> {
    let root = resolve_workspace(options.workspace)?;
    let mut reporter = ConsoleReporter::new(options.verbose);
    patch_workspace(
        &root,
        options.config.as_deref(),
        options.dry_run,
        &mut reporter,
    )?;
    Ok(())
}

/// Get workspace root from CLI argument or current directory
fn resolve_workspace(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| SitepatchError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };

    dunce::canonicalize(&path).map_err(|e| SitepatchError::IoError {
        message: format!("Workspace {} is not accessible: {}", path.display(), e),
    })
}

fn patch_workspace(
    root: &Path,
    config_path: Option<&Path>,
    dry_run: bool,
    reporter: &mut dyn crate::ui::Reporter,
) -> Result<RunSummary> {
    let config = SiteConfig::load(root, config_path)?;
    let catalog = Catalog::from_config(root, &config);
    Engine::new(&config, &catalog, dry_run).run(reporter)
}
