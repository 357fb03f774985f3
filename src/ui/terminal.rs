//! Styled terminal output

use console::Style;

use super::Reporter;
use crate::catalog::DocumentSet;
use crate::engine::RunSummary;
use crate::patch::PatchOutcome;

/// Prints progress to stdout and warnings to stderr
#[derive(Debug)]
pub struct ConsoleReporter {
    verbose: bool,
    header: Style,
    applied: Style,
    quiet: Style,
    warn: Style,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            header: Style::new().bold(),
            applied: Style::new().green(),
            quiet: Style::new().dim(),
            warn: Style::new().yellow().bold(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn set_started(&mut self, set: &DocumentSet, dir: &str) {
        println!(
            "{} {} ({dir}, lang={})",
            self.header.apply_to("Patching"),
            set.slot,
            set.lang
        );
    }

    fn set_skipped(&mut self, set: &DocumentSet, dir: &str) {
        println!(
            "{}",
            self.quiet
                .apply_to(format!("Skipping {} set: {dir} does not exist", set.slot))
        );
    }

    fn patch(&mut self, file: &str, patch: &str, outcome: PatchOutcome) {
        match outcome {
            PatchOutcome::Applied => {
                println!("  {} {file}: {patch}", self.applied.apply_to("+"));
            }
            PatchOutcome::AlreadyPresent if self.verbose => {
                println!(
                    "  {}",
                    self.quiet.apply_to(format!("= {file}: {patch} already present"))
                );
            }
            PatchOutcome::AlreadyPresent => {}
            PatchOutcome::Skipped(reason) => {
                if self.verbose {
                    println!(
                        "  {}",
                        self.quiet.apply_to(format!("- {file}: {patch} skipped ({reason})"))
                    );
                }
            }
        }
    }

    fn file_updated(&mut self, file: &str, dry_run: bool) {
        if dry_run {
            println!("  {} {file}", self.applied.apply_to("would update"));
        } else if self.verbose {
            println!("  {} {file}", self.applied.apply_to("updated"));
        }
    }

    fn file_restored(&mut self, file: &str, rev: &str, dry_run: bool) {
        let verb = if dry_run { "would restore" } else { "restored" };
        println!("  {} {file} from {rev}", self.applied.apply_to(verb));
    }

    fn warning(&mut self, message: &str) {
        eprintln!("{} {message}", self.warn.apply_to("Warning:"));
    }

    fn finish(&mut self, summary: &RunSummary, dry_run: bool) {
        let verb = if dry_run { "Would patch" } else { "Patched" };
        println!(
            "{} {} file(s), {} already up to date, {} file(s) restored, {} warning(s)",
            self.header.apply_to(verb),
            summary.files_patched,
            summary.files_unchanged,
            summary.files_restored,
            summary.warnings.len()
        );
    }
}
