//! Idempotent text patches
//!
//! Every patch owns a presence predicate ([`Patch::is_present`]) and an
//! application procedure ([`Patch::apply`]) that only runs when the
//! predicate is false. Both are pure functions over the file content, so
//! running a patch set twice yields the same bytes as running it once.
//!
//! - [`stylesheet`]: image centering rules and the floating button style
//! - [`button`]: download link before `</body>`
//! - [`head`]: doctype, `<html lang>` and head metadata
//! - [`meta`]: generated head blocks used by [`head`]
//! - [`splice`]: locate/splice primitives shared by all patches

pub mod button;
pub mod head;
pub mod meta;
pub mod splice;
pub mod stylesheet;

pub use button::DownloadButtonPatch;
pub use head::HeadPatch;
pub use stylesheet::StylesheetPatch;

use crate::error::Result;

/// Result of an application procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Application {
    /// New content
    Changed(String),
    /// The anchor the patch needs is missing; content must stay as it is
    Skipped(&'static str),
}

/// What happened when a patch was run against some content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    AlreadyPresent,
    Skipped(&'static str),
}

/// A named, idempotent transformation of a file's text
pub trait Patch {
    /// Short name used in progress output
    fn name(&self) -> &'static str;

    /// True iff the patch's effect is already present in `content`
    fn is_present(&self, content: &str) -> bool;

    /// Apply the patch; only called when [`Patch::is_present`] is false
    fn apply(&self, content: &str) -> Result<Application>;
}

/// Run one patch, guarded by its presence predicate
pub fn run_patch(patch: &dyn Patch, content: String) -> Result<(String, PatchOutcome)> {
    if patch.is_present(&content) {
        return Ok((content, PatchOutcome::AlreadyPresent));
    }

    match patch.apply(&content)? {
        Application::Changed(updated) => Ok((updated, PatchOutcome::Applied)),
        Application::Skipped(reason) => Ok((content, PatchOutcome::Skipped(reason))),
    }
}

/// Outcome of running an ordered patch list over one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatchResult {
    pub content: String,
    pub outcomes: Vec<(&'static str, PatchOutcome)>,
}

impl FilePatchResult {
    /// Outcome of the named patch, if it ran
    pub fn outcome(&self, name: &str) -> Option<PatchOutcome> {
        self.outcomes
            .iter()
            .find(|(patch, _)| *patch == name)
            .map(|(_, outcome)| *outcome)
    }
}

/// Run patches in order; the first error aborts the whole file
pub fn run_patches(patches: &[&dyn Patch], content: &str) -> Result<FilePatchResult> {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(patches.len());

    for patch in patches {
        let (updated, outcome) = run_patch(*patch, current)?;
        current = updated;
        outcomes.push((patch.name(), outcome));
    }

    Ok(FilePatchResult {
        content: current,
        outcomes,
    })
}
