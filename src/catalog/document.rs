//! Documents and stylesheets as loaded from disk

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, SitepatchError};

/// Role of an HTML document within its set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Main,
    Secondary,
    Landing,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Main => f.write_str("main"),
            Role::Secondary => f.write_str("secondary"),
            Role::Landing => f.write_str("landing"),
        }
    }
}

fn file_read_error(path: &Path, e: &std::io::Error) -> SitepatchError {
    SitepatchError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: &std::io::Error) -> SitepatchError {
    SitepatchError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Read a text file
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| file_read_error(path, &e))
}

/// Write a text file
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| file_write_error(path, &e))
}

/// An HTML page with its language and role
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub lang: String,
    pub role: Role,
    pub content: String,
}

impl Document {
    pub fn load(path: impl Into<PathBuf>, lang: impl Into<String>, role: Role) -> Result<Self> {
        let path = path.into();
        let content = read_text(&path)?;
        Ok(Self {
            path,
            lang: lang.into(),
            role,
            content,
        })
    }
}

/// A stylesheet file
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub path: PathBuf,
    pub content: String,
}

impl Stylesheet {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = read_text(&path)?;
        Ok(Self { path, content })
    }
}
