//! Floating "download PDF" link inserted before `</body>`

use super::splice;
use super::{Application, Patch};
use crate::error::Result;

/// Class name of the inserted link; also the presence marker
pub const BUTTON_CLASS: &str = "download-pdf-btn";

/// Inserts the download link with a locale-specific label
#[derive(Debug, Clone)]
pub struct DownloadButtonPatch {
    href: String,
    label: String,
}

impl DownloadButtonPatch {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Markup of the inserted link, newline included
    pub fn anchor(&self) -> String {
        format!(
            "<a href=\"{}\" class=\"{BUTTON_CLASS}\" download>{}</a>\n",
            self.href, self.label
        )
    }
}

impl Patch for DownloadButtonPatch {
    fn name(&self) -> &'static str {
        "download-button"
    }

    fn is_present(&self, content: &str) -> bool {
        content.contains(BUTTON_CLASS)
    }

    fn apply(&self, content: &str) -> Result<Application> {
        let Some(body_end) = splice::rfind_close_tag(content, "body") else {
            return Ok(Application::Skipped("no </body>"));
        };

        Ok(Application::Changed(splice::insert_at(
            content,
            body_end.start,
            &self.anchor(),
        )))
    }
}
