//! Command implementations for sitepatch CLI

pub mod completions;
pub mod patch;
pub mod version;
