//! Error types and handling for sitepatch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only structural failures live here. Tolerated conditions (missing assets,
//! missing secondary set, non-main pages without a head) are reported as
//! warnings by the engine and never become errors.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sitepatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SitepatchError {
    // Stylesheet anchor errors
    #[error("Anchor block '{selector}' not found in {path}")]
    #[diagnostic(
        code(sitepatch::stylesheet::anchor_not_found),
        help("The converter output no longer contains the anchor rule; update `files.anchor_selector`")
    )]
    AnchorNotFound { selector: String, path: String },

    #[error("Anchor block '{selector}' occurs {count} times in {path}")]
    #[diagnostic(
        code(sitepatch::stylesheet::anchor_ambiguous),
        help("The anchor rule must occur exactly once so the insertion point is unambiguous")
    )]
    AnchorAmbiguous {
        selector: String,
        path: String,
        count: usize,
    },

    #[error("Unterminated rule block '{selector}' in {path}")]
    #[diagnostic(code(sitepatch::stylesheet::unterminated_block))]
    UnterminatedBlock { selector: String, path: String },

    // Head errors
    #[error("Head section not found in main page: {path}")]
    #[diagnostic(
        code(sitepatch::head::main_head_missing),
        help("The main page must contain both <head> and </head>")
    )]
    MainHeadMissing { path: String },

    #[error("Language '{tag}' is not in the locale table")]
    #[diagnostic(
        code(sitepatch::head::unknown_locale),
        help("The locale table has exactly two entries: primary and secondary")
    )]
    UnknownLocale { tag: String },

    // Catalog errors
    #[error("Primary document set not found at: {path}")]
    #[diagnostic(
        code(sitepatch::catalog::primary_missing),
        help("Run sitepatch from the site root or pass --workspace")
    )]
    PrimarySetMissing { path: String },

    #[error("Invalid page pattern '{pattern}': {reason}")]
    #[diagnostic(code(sitepatch::catalog::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // Snapshot errors
    #[error("Not in a git repository: {path}")]
    #[diagnostic(
        code(sitepatch::snapshot::not_in_repo),
        help("Asset recovery reads from git history; run inside the site's repository")
    )]
    NotInGitRepository { path: String },

    #[error("Failed to resolve snapshot revision '{rev}': {reason}")]
    #[diagnostic(code(sitepatch::snapshot::rev_resolve_failed))]
    SnapshotRevisionFailed { rev: String, reason: String },

    #[error("'{path}' is not present in snapshot '{rev}'")]
    #[diagnostic(code(sitepatch::snapshot::entry_missing))]
    SnapshotEntryMissing { path: String, rev: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(sitepatch::snapshot::git_failed))]
    GitOperationFailed { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(sitepatch::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(sitepatch::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(sitepatch::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(sitepatch::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(sitepatch::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(sitepatch::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sitepatch::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SitepatchError {
    fn from(err: std::io::Error) -> Self {
        SitepatchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SitepatchError {
    fn from(err: serde_yaml::Error) -> Self {
        SitepatchError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for SitepatchError {
    fn from(err: git2::Error) -> Self {
        SitepatchError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SitepatchError>;
