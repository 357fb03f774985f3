//! Head modernization
//!
//! Per document: a legacy doctype becomes `<!DOCTYPE html>`, the root
//! element gets the document's `lang`, then the head is handled by role.
//! The main page's head is replaced as a whole; any other page keeps its
//! head and only gains the baseline lines plus a modern stylesheet link.
//!
//! Without both `<head>` and `</head>` nothing is touched.

use std::ops::Range;

use super::meta::{self, GENERATOR_COMMENT};
use super::splice;
use super::{Application, Patch};
use crate::error::Result;

pub const MODERN_DOCTYPE: &str = "<!DOCTYPE html>";

/// Reason reported when a document has no usable head
pub const NO_HEAD: &str = "no <head>...</head>";

/// Doctype state of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doctype {
    /// Any doctype other than the HTML5 one, with its byte range
    Legacy(Range<usize>),
    Modern,
    Absent,
}

/// Classify the first doctype declaration
pub fn doctype(content: &str) -> Doctype {
    let lowered = content.to_ascii_lowercase();
    let Some(start) = lowered.find("<!doctype") else {
        return Doctype::Absent;
    };
    let Some(len) = lowered[start..].find('>') else {
        return Doctype::Absent;
    };
    let declaration = &lowered[start..=start + len];

    let normalized = declaration
        .trim_start_matches("<!doctype")
        .trim_end_matches('>')
        .split_whitespace()
        .collect::<Vec<_>>();
    if normalized == ["html"] {
        Doctype::Modern
    } else {
        Doctype::Legacy(start..start + len + 1)
    }
}

/// Legacy stylesheet link spelling emitted by the converter
pub fn legacy_stylesheet_link(stylesheet: &str) -> String {
    format!("<link rel='stylesheet' type='text/css' href='{stylesheet}' />")
}

/// Modern replacement for [`legacy_stylesheet_link`]
pub fn modern_stylesheet_link(stylesheet: &str) -> String {
    format!("<link rel=\"stylesheet\" href=\"{stylesheet}\">")
}

#[derive(Debug, Clone)]
enum HeadMode {
    /// Replace the whole head with this generated block
    Main { block: String },
    /// Inject baseline lines and fix the stylesheet link spelling
    Secondary { stylesheet: String },
}

/// Doctype, `lang` and head patch for one document
#[derive(Debug, Clone)]
pub struct HeadPatch {
    lang: String,
    mode: HeadMode,
}

impl HeadPatch {
    pub const NAME: &'static str = "head";

    /// Patch for the main page; `block` is the full generated `<head>`
    pub fn main(lang: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            mode: HeadMode::Main {
                block: block.into(),
            },
        }
    }

    /// Patch for any page other than the main one
    pub fn secondary(lang: impl Into<String>, stylesheet: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            mode: HeadMode::Secondary {
                stylesheet: stylesheet.into(),
            },
        }
    }

    fn lang_is_set(&self, content: &str) -> bool {
        let Some(tag) = splice::find_open_tag(content, "html") else {
            return true;
        };
        let tag = &content[tag];
        splice::attribute_value_range(tag, "lang").is_some_and(|range| tag[range] == *self.lang)
    }

    fn set_lang(&self, content: &str) -> String {
        match splice::find_open_tag(content, "html") {
            Some(range) => {
                let updated = splice::set_attribute(&content[range.clone()], "lang", &self.lang);
                splice::splice(content, range, &updated)
            }
            None => content.to_string(),
        }
    }

    fn head_is_done(&self, content: &str, head: &Range<usize>) -> bool {
        match &self.mode {
            HeadMode::Main { block } => content[head.clone()] == **block,
            HeadMode::Secondary { stylesheet } => {
                content[head.clone()].contains(GENERATOR_COMMENT)
                    && !content.contains(&legacy_stylesheet_link(stylesheet))
            }
        }
    }

    fn patch_head(&self, content: &str, head: Range<usize>, open_end: usize) -> String {
        match &self.mode {
            HeadMode::Main { block } => splice::splice(content, head, block),
            HeadMode::Secondary { stylesheet } => {
                let injected = if content[head].contains(GENERATOR_COMMENT) {
                    content.to_string()
                } else {
                    splice::insert_at(content, open_end, &meta::baseline_lines())
                };
                injected.replace(
                    &legacy_stylesheet_link(stylesheet),
                    &modern_stylesheet_link(stylesheet),
                )
            }
        }
    }
}

/// Range of the head section (`<head ...>` through `</head>`) and the end of
/// its opening tag
fn locate_head(content: &str) -> Option<(Range<usize>, usize)> {
    let open = splice::find_open_tag(content, "head")?;
    let close = splice::find_close_tag(content, "head", open.end)?;
    Some((open.start..close.end, open.end))
}

impl Patch for HeadPatch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_present(&self, content: &str) -> bool {
        let Some((head, _)) = locate_head(content) else {
            return false;
        };
        !matches!(doctype(content), Doctype::Legacy(_))
            && self.lang_is_set(content)
            && self.head_is_done(content, &head)
    }

    fn apply(&self, content: &str) -> Result<Application> {
        if locate_head(content).is_none() {
            return Ok(Application::Skipped(NO_HEAD));
        }

        let mut current = match doctype(content) {
            Doctype::Legacy(range) => splice::splice(content, range, MODERN_DOCTYPE),
            Doctype::Modern | Doctype::Absent => content.to_string(),
        };

        if !self.lang_is_set(&current) {
            current = self.set_lang(&current);
        }

        // Offsets moved with the doctype and lang edits
        let Some((head, open_end)) = locate_head(&current) else {
            return Ok(Application::Skipped(NO_HEAD));
        };
        if !self.head_is_done(&current, &head) {
            current = self.patch_head(&current, head, open_end);
        }

        Ok(Application::Changed(current))
    }
}
