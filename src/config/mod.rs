//! Configuration file handling for sitepatch
//!
//! This module contains data structures for:
//! - `sitepatch.yaml` - site metadata, locale table and catalog layout
//!
//! Every field has a default, so a workspace without `sitepatch.yaml` runs
//! against the built-in catalog.

pub mod locale;
pub mod site;

// Re-export commonly used types
pub use locale::LocaleTable;
pub use site::{FileNames, SiteConfig, SiteInfo};
