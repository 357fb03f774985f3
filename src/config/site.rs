//! Site configuration (sitepatch.yaml) data structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::locale::LocaleTable;
use crate::error::{Result, SitepatchError};

/// Default configuration file name, looked up at the workspace root
pub const CONFIG_FILE_NAME: &str = "sitepatch.yaml";

/// Top-level configuration (sitepatch.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Values shared by both languages
    pub site: SiteInfo,

    /// Per-language values
    pub locales: LocaleTable,

    /// Document set directories, relative to the workspace root
    pub sets: SetDirs,

    /// File names inside each document set
    pub files: FileNames,

    /// Git revision used to restore missing assets
    pub snapshot_ref: SnapshotRef,
}

/// Language-independent site metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub author: String,
    pub keywords: String,
    pub robots: String,

    /// Relative link target of the download button
    pub pdf_href: String,

    /// Twitter handle for `twitter:site` and `twitter:creator`
    pub twitter_handle: String,

    /// Absolute URL of the sharing image
    pub image_url: String,

    /// Alt text for the sharing image
    pub image_alt: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            author: "Jane Doe".to_string(),
            keywords: "curriculum vitae, CV, research, publications".to_string(),
            robots: "index, follow".to_string(),
            pdf_href: "main.pdf".to_string(),
            twitter_handle: "@janedoe".to_string(),
            image_url: "https://example.org/en/portrait.jpg".to_string(),
            image_alt: "Portrait of Jane Doe".to_string(),
        }
    }
}

/// Directories of the two document sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetDirs {
    pub primary: PathBuf,
    pub secondary: PathBuf,
}

impl Default for SetDirs {
    fn default() -> Self {
        Self {
            primary: PathBuf::from("en"),
            secondary: PathBuf::from("es"),
        }
    }
}

/// Fixed file names inside a document set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    pub stylesheet: String,
    pub main_page: String,
    pub landing_page: String,

    /// Secondary pages are named `<page_prefix><digits>.html`
    pub page_prefix: String,

    /// Selector of the stylesheet rule the image rules are anchored to
    pub anchor_selector: String,

    /// Binary assets restored from the snapshot when missing
    pub assets: Vec<String>,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            stylesheet: "main.css".to_string(),
            main_page: "main.html".to_string(),
            landing_page: "index.html".to_string(),
            page_prefix: "main".to_string(),
            anchor_selector: "div.figure".to_string(),
            assets: [
                "favicon.ico",
                "favicon-16x16.png",
                "favicon-32x32.png",
                "apple-touch-icon.png",
                "android-chrome-192x192.png",
                "android-chrome-512x512.png",
                "portrait.jpg",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Snapshot revision wrapper so the default is `HEAD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotRef(pub String);

impl Default for SnapshotRef {
    fn default() -> Self {
        Self("HEAD".to_string())
    }
}

impl SnapshotRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SiteConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration for a workspace
    ///
    /// An explicit path must exist. Without one, `sitepatch.yaml` at the
    /// workspace root is used when present, built-in defaults otherwise.
    pub fn load(workspace_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = workspace_root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let yaml =
            std::fs::read_to_string(&path).map_err(|e| SitepatchError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let config = Self::from_yaml(&yaml).map_err(|e| match e {
            SitepatchError::ConfigParseFailed { reason, .. } => SitepatchError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.locales.validate()?;

        let required = [
            ("files.stylesheet", &self.files.stylesheet),
            ("files.main_page", &self.files.main_page),
            ("files.landing_page", &self.files.landing_page),
            ("files.page_prefix", &self.files.page_prefix),
            ("files.anchor_selector", &self.files.anchor_selector),
            ("snapshot_ref", &self.snapshot_ref.0),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SitepatchError::ConfigInvalid {
                    message: format!("{field} cannot be empty"),
                });
            }
        }

        if self.sets.primary == self.sets.secondary {
            return Err(SitepatchError::ConfigInvalid {
                message: "sets.primary and sets.secondary must be different directories"
                    .to_string(),
            });
        }

        Ok(())
    }
}
