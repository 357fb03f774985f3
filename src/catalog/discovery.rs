//! Discovery of numbered content pages
//!
//! The converter splits a document into `<prefix>1.html`, `<prefix>2.html`
//! and so on next to the main page. Only direct children of the set
//! directory are considered.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, SitepatchError};
use crate::path_utils;

/// Characters with a meaning in glob syntax
const GLOB_META: &str = "?*$:<>()[]{},\\";

/// Glob matching `<prefix><one or more digits>.html`
pub fn page_glob(prefix: &str) -> String {
    let mut literal = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if GLOB_META.contains(c) {
            literal.push('\\');
        }
        literal.push(c);
    }
    format!("{literal}<[0-9]:1,>.html")
}

/// Find the numbered pages of a document set, sorted by file name
pub fn discover_pages(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let pattern = page_glob(prefix);
    let glob = Glob::new(&pattern).map_err(|e| SitepatchError::InvalidPattern {
        pattern: pattern.clone(),
        reason: e.to_string(),
    })?;

    let pages = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = path_utils::to_forward_slashes(Path::new(entry.file_name()));
            glob.matched(&CandidatePath::from(name.as_str())).is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    Ok(pages)
}
