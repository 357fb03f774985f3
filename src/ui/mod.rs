//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress lines for each document set, file and patch
//! - Warnings for tolerated failures (stderr)
//! - The end-of-run summary
//!
//! All output goes through the [`Reporter`] trait so the engine never
//! prints directly. [`ConsoleReporter`] is used by the CLI.

mod terminal;

pub use terminal::ConsoleReporter;

use crate::catalog::DocumentSet;
use crate::engine::RunSummary;
use crate::patch::PatchOutcome;

/// Receiver for engine progress events
pub trait Reporter {
    /// A document set is about to be processed
    fn set_started(&mut self, set: &DocumentSet, dir: &str);

    /// An optional document set does not exist
    fn set_skipped(&mut self, set: &DocumentSet, dir: &str);

    /// One patch ran against one file
    fn patch(&mut self, file: &str, patch: &str, outcome: PatchOutcome);

    /// A file's patched content was (or in a dry run, would be) written
    fn file_updated(&mut self, file: &str, dry_run: bool);

    /// A missing file was (or would be) restored from the snapshot
    fn file_restored(&mut self, file: &str, rev: &str, dry_run: bool);

    /// A tolerated failure
    fn warning(&mut self, message: &str);

    /// The run completed
    fn finish(&mut self, summary: &RunSummary, dry_run: bool);
}

/// Reporter recording events as plain strings, for assertions in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|event| event.contains(needle))
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn set_started(&mut self, set: &DocumentSet, dir: &str) {
        self.events.push(format!("start {} {dir}", set.slot));
    }

    fn set_skipped(&mut self, set: &DocumentSet, dir: &str) {
        self.events.push(format!("skip {} {dir}", set.slot));
    }

    fn patch(&mut self, file: &str, patch: &str, outcome: PatchOutcome) {
        self.events.push(format!("patch {file} {patch} {outcome:?}"));
    }

    fn file_updated(&mut self, file: &str, dry_run: bool) {
        self.events.push(format!("updated {file} dry_run={dry_run}"));
    }

    fn file_restored(&mut self, file: &str, rev: &str, dry_run: bool) {
        self.events
            .push(format!("restored {file} from {rev} dry_run={dry_run}"));
    }

    fn warning(&mut self, message: &str) {
        self.events.push(format!("warning {message}"));
    }

    fn finish(&mut self, summary: &RunSummary, dry_run: bool) {
        self.events.push(format!(
            "finish patched={} dry_run={dry_run}",
            summary.files_patched
        ));
    }
}
