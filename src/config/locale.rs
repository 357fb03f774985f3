//! Two-entry locale table
//!
//! The table has a `primary` and a `secondary` entry and nothing else.
//! Adding a third language means changing this schema, not the data.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SitepatchError};

/// Per-language values used by the generated markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Language tag written to `<html lang>` and `hreflang` (e.g. "en")
    pub tag: String,

    /// Open Graph locale code (e.g. "`en_US`")
    pub og_locale: String,

    /// Appended to the site name in `<title>`
    pub title_suffix: String,

    /// Meta description
    pub description: String,

    /// Canonical URL of this language's main page
    pub url: String,

    /// Text of the floating download button
    pub button_label: String,
}

/// Locale lookup table with exactly two entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleTable {
    pub primary: LocaleEntry,
    pub secondary: LocaleEntry,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            primary: LocaleEntry {
                tag: "en".to_string(),
                og_locale: "en_US".to_string(),
                title_suffix: "Curriculum Vitae".to_string(),
                description: "Curriculum vitae: education, research experience, \
                              publications and skills."
                    .to_string(),
                url: "https://example.org/en/main.html".to_string(),
                button_label: "Download PDF".to_string(),
            },
            secondary: LocaleEntry {
                tag: "es".to_string(),
                og_locale: "es_ES".to_string(),
                title_suffix: "Currículum Vitae".to_string(),
                description: "Currículum vitae: formación, experiencia investigadora, \
                              publicaciones y habilidades."
                    .to_string(),
                url: "https://example.org/es/main.html".to_string(),
                button_label: "Descargar PDF".to_string(),
            },
        }
    }
}

impl LocaleTable {
    /// Find the entry for a language tag
    pub fn lookup(&self, tag: &str) -> Option<&LocaleEntry> {
        [&self.primary, &self.secondary]
            .into_iter()
            .find(|entry| entry.tag == tag)
    }

    /// Find the entry for a language tag, failing for tags outside the table
    pub fn require(&self, tag: &str) -> Result<&LocaleEntry> {
        self.lookup(tag).ok_or_else(|| SitepatchError::UnknownLocale {
            tag: tag.to_string(),
        })
    }

    /// Download button label for a tag; unknown tags get the primary label
    pub fn button_label(&self, tag: &str) -> &str {
        self.lookup(tag)
            .map_or(self.primary.button_label.as_str(), |entry| {
                entry.button_label.as_str()
            })
    }

    /// Validate the locale table
    pub fn validate(&self) -> Result<()> {
        for (slot, entry) in [("primary", &self.primary), ("secondary", &self.secondary)] {
            if entry.tag.trim().is_empty() {
                return Err(SitepatchError::ConfigInvalid {
                    message: format!("locales.{slot}.tag cannot be empty"),
                });
            }
            if entry.url.trim().is_empty() {
                return Err(SitepatchError::ConfigInvalid {
                    message: format!("locales.{slot}.url cannot be empty"),
                });
            }
        }

        if self.primary.tag == self.secondary.tag {
            return Err(SitepatchError::ConfigInvalid {
                message: format!(
                    "primary and secondary locales share the tag '{}'",
                    self.primary.tag
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_entries() {
        let table = LocaleTable::default();
        assert_eq!(table.lookup("en").map(|e| e.og_locale.as_str()), Some("en_US"));
        assert_eq!(table.lookup("es").map(|e| e.og_locale.as_str()), Some("es_ES"));
        assert!(table.lookup("fr").is_none());
    }

    #[test]
    fn test_require_unknown_tag() {
        let table = LocaleTable::default();
        let err = table.require("de").unwrap_err();
        assert!(matches!(err, SitepatchError::UnknownLocale { .. }));
    }

    #[test]
    fn test_button_label_falls_back_to_primary() {
        let table = LocaleTable::default();
        assert_eq!(table.button_label("en"), "Download PDF");
        assert_eq!(table.button_label("es"), "Descargar PDF");
        assert_eq!(table.button_label("pt"), "Download PDF");
        assert_eq!(table.button_label(""), "Download PDF");
    }

    #[test]
    fn test_validate_rejects_duplicate_tags() {
        let mut table = LocaleTable::default();
        table.secondary.tag = "en".to_string();
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("share the tag 'en'"));
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut table = LocaleTable::default();
        table.secondary.url = "  ".to_string();
        assert!(table.validate().is_err());
    }
}
