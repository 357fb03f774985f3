//! Stylesheet patch: image centering and floating button rules
//!
//! Both insertions are anchored to one rule block identified by its
//! selector. The anchor has to occur exactly once; zero or several matches
//! fail the run instead of guessing an insertion point.

use std::fmt::Write;
use std::path::Path;

use super::button::BUTTON_CLASS;
use super::splice::{self, BlockLookup};
use super::{Application, Patch};
use crate::error::{Result, SitepatchError};

/// Declaration inserted at the end of the anchor block
pub const CENTER_DECLARATION: &str = "text-align: center;";

/// Per-image vertical margins, keyed by the converter's image file names
const IMAGE_MARGINS: [(&str, &str); 3] = [
    ("image1.png", "margin-top: 1em; margin-bottom: 2em;"),
    ("image2.png", "margin-top: 2em; margin-bottom: 2em;"),
    ("image3.png", "margin-top: 2em; margin-bottom: 1em;"),
];

const BUTTON_RULES: &str = r#"{class} {
  position: fixed;
  right: 1.5em;
  bottom: 1.5em;
  z-index: 1000;
  padding: 0.6em 1.2em;
  border-radius: 2em;
  background: #1f4e79;
  color: #ffffff;
  font-family: sans-serif;
  font-weight: bold;
  text-decoration: none;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3);
}

{class}:hover {
  background: #163a5a;
}

{class}::before {
  content: "\2B07\00a0";
}
"#;

/// Inserts image centering rules and the download button style
#[derive(Debug, Clone)]
pub struct StylesheetPatch {
    anchor_selector: String,
    path: String,
}

impl StylesheetPatch {
    pub fn new(anchor_selector: impl Into<String>, path: &Path) -> Self {
        Self {
            anchor_selector: anchor_selector.into(),
            path: path.display().to_string(),
        }
    }

    /// Header of the image rule; its presence means the patch has run
    pub fn marker(&self) -> String {
        format!("{} img {{", self.anchor_selector)
    }

    /// Rules inserted after the anchor block
    pub fn rules(&self) -> String {
        let mut rules = format!(
            "\n\n{}\n  display: block;\n  margin-left: auto;\n  margin-right: auto;\n  max-width: 100%;\n  height: auto;\n}}\n",
            self.marker()
        );

        for (image, margins) in IMAGE_MARGINS {
            let _ = write!(rules, "\nimg[src=\"{image}\"] {{\n  {margins}\n}}\n");
        }

        rules.push('\n');
        rules.push_str(&BUTTON_RULES.replace("{class}", &format!(".{BUTTON_CLASS}")));
        rules
    }
}

impl Patch for StylesheetPatch {
    fn name(&self) -> &'static str {
        "stylesheet"
    }

    fn is_present(&self, content: &str) -> bool {
        content.contains(&self.marker())
    }

    fn apply(&self, content: &str) -> Result<Application> {
        let block = match splice::find_rule_block(content, &self.anchor_selector) {
            BlockLookup::Found(block) => block,
            BlockLookup::NotFound => {
                return Err(SitepatchError::AnchorNotFound {
                    selector: self.anchor_selector.clone(),
                    path: self.path.clone(),
                });
            }
            BlockLookup::Ambiguous(count) => {
                return Err(SitepatchError::AnchorAmbiguous {
                    selector: self.anchor_selector.clone(),
                    path: self.path.clone(),
                    count,
                });
            }
            BlockLookup::Unterminated => {
                return Err(SitepatchError::UnterminatedBlock {
                    selector: self.anchor_selector.clone(),
                    path: self.path.clone(),
                });
            }
        };

        // Later offset first so the earlier one stays valid
        let with_rules = splice::insert_at(content, block.close_brace + 1, &self.rules());

        let body = block.body(content);
        let declarations = body.trim_end();
        let separator = if declarations.trim().is_empty() || declarations.ends_with(';') {
            ""
        } else {
            ";"
        };
        let indent = if body.contains('\n') { "\n  " } else { " " };
        let at = block.open_brace + 1 + declarations.len();
        let patched = splice::insert_at(
            &with_rules,
            at,
            &format!("{separator}{indent}{CENTER_DECLARATION}"),
        );

        Ok(Application::Changed(patched))
    }
}
