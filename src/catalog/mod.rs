//! Explicit catalog of the files the engine patches
//!
//! The catalog is built once from the configuration and handed to the
//! engine; nothing downstream looks at the working directory on its own.

pub mod discovery;
pub mod document;

pub use discovery::discover_pages;
pub use document::{Document, Role, Stylesheet};

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{FileNames, SiteConfig};

/// Which of the two document sets a descriptor refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetSlot {
    Primary,
    Secondary,
}

impl fmt::Display for SetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetSlot::Primary => f.write_str("primary"),
            SetSlot::Secondary => f.write_str("secondary"),
        }
    }
}

/// One localized copy of the site
#[derive(Debug, Clone)]
pub struct DocumentSet {
    pub slot: SetSlot,
    pub dir: PathBuf,
    pub lang: String,
    pub files: FileNames,
}

impl DocumentSet {
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.dir.join(&self.files.stylesheet)
    }

    pub fn main_page_path(&self) -> PathBuf {
        self.dir.join(&self.files.main_page)
    }

    pub fn landing_page_path(&self) -> PathBuf {
        self.dir.join(&self.files.landing_page)
    }

    /// Paths of every asset the set should contain
    pub fn asset_paths(&self) -> Vec<PathBuf> {
        self.files
            .assets
            .iter()
            .map(|asset| self.dir.join(asset))
            .collect()
    }
}

/// Ordered list of document sets: primary first, then secondary
#[derive(Debug, Clone)]
pub struct Catalog {
    pub root: PathBuf,
    pub sets: Vec<DocumentSet>,
}

impl Catalog {
    /// Build the catalog for a workspace
    pub fn from_config(root: &Path, config: &SiteConfig) -> Self {
        let set = |slot, dir: &Path, lang: &str| DocumentSet {
            slot,
            dir: root.join(dir),
            lang: lang.to_string(),
            files: config.files.clone(),
        };

        Self {
            root: root.to_path_buf(),
            sets: vec![
                set(
                    SetSlot::Primary,
                    &config.sets.primary,
                    &config.locales.primary.tag,
                ),
                set(
                    SetSlot::Secondary,
                    &config.sets.secondary,
                    &config.locales.secondary.tag,
                ),
            ],
        }
    }
}
