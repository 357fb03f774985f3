//! Cross-platform path utilities
//!
//! Glob matching and progress output both want forward slashes regardless
//! of the host platform.

use std::path::Path;

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path relative to `root` for display, falling back to the full path
pub fn display_relative(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    to_forward_slashes(relative)
}
