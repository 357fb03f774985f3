//! Patch orchestration over the catalog
//!
//! Document sets are processed in catalog order (primary, then secondary).
//! Per set:
//! 1. restore missing assets from the snapshot
//! 2. restore the landing page if missing
//! 3. stylesheet patch
//! 4. main page: head replacement + download button
//! 5. landing page: download button
//! 6. numbered pages: head modernization + download button
//!
//! Every file is read once, patched in memory and written back once, only
//! when all of its patches succeeded and the content actually changed.

pub mod recovery;

use std::path::Path;

use crate::catalog::{Catalog, Document, DocumentSet, Role, SetSlot, Stylesheet, discover_pages};
use crate::catalog::document::write_text;
use crate::config::SiteConfig;
use crate::error::{Result, SitepatchError};
use crate::git::Snapshot;
use crate::patch::{
    DownloadButtonPatch, FilePatchResult, HeadPatch, Patch, PatchOutcome, StylesheetPatch, meta,
    run_patches,
};
use crate::path_utils::display_relative;
use crate::ui::Reporter;

use recovery::Recovery;

/// Counters and warnings of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sets_processed: usize,
    pub sets_skipped: usize,
    pub files_patched: usize,
    pub files_unchanged: usize,
    pub files_restored: usize,
    pub warnings: Vec<String>,
}

/// Reporter plus the summary being built
struct Progress<'r> {
    reporter: &'r mut dyn Reporter,
    summary: RunSummary,
}

impl Progress<'_> {
    fn warn(&mut self, message: String) {
        self.reporter.warning(&message);
        self.summary.warnings.push(message);
    }
}

/// Runs the full patch set over a catalog
#[derive(Debug)]
pub struct Engine<'a> {
    config: &'a SiteConfig,
    catalog: &'a Catalog,
    snapshot: std::result::Result<Snapshot, String>,
    dry_run: bool,
}

impl<'a> Engine<'a> {
    /// Create an engine; the snapshot is opened here so a missing
    /// repository only matters once a file actually needs restoring
    pub fn new(config: &'a SiteConfig, catalog: &'a Catalog, dry_run: bool) -> Self {
        let snapshot = Snapshot::open(&catalog.root, config.snapshot_ref.as_str())
            .map_err(|e| e.to_string());
        Self {
            config,
            catalog,
            snapshot,
            dry_run,
        }
    }

    /// Process every document set
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        let mut progress = Progress {
            reporter,
            summary: RunSummary::default(),
        };

        for set in &self.catalog.sets {
            self.process_set(set, &mut progress)?;
        }

        progress.reporter.finish(&progress.summary, self.dry_run);
        Ok(progress.summary)
    }

    fn display(&self, path: &Path) -> String {
        display_relative(path, &self.catalog.root)
    }

    fn process_set(&self, set: &DocumentSet, progress: &mut Progress<'_>) -> Result<()> {
        let dir = self.display(&set.dir);

        if !set.exists() {
            if set.slot == SetSlot::Primary {
                return Err(SitepatchError::PrimarySetMissing {
                    path: set.dir.display().to_string(),
                });
            }
            progress.reporter.set_skipped(set, &dir);
            progress.summary.sets_skipped += 1;
            return Ok(());
        }

        progress.reporter.set_started(set, &dir);

        for asset in set.asset_paths() {
            self.recover(&asset, progress);
        }
        let landing_available = self.recover(&set.landing_page_path(), progress);

        self.patch_stylesheet(set, progress)?;
        self.patch_main_page(set, progress)?;

        let button = self.button_patch(set);
        if landing_available {
            let landing = Document::load(set.landing_page_path(), &set.lang, Role::Landing)?;
            self.patch_document(&landing, &[&button], progress)?;
        }

        let head = HeadPatch::secondary(&set.lang, &set.files.stylesheet);
        for page in discover_pages(&set.dir, &set.files.page_prefix)? {
            let document = Document::load(page, &set.lang, Role::Secondary)?;
            self.patch_document(&document, &[&head, &button], progress)?;
        }

        progress.summary.sets_processed += 1;
        Ok(())
    }

    /// Returns whether the file is on disk afterwards
    fn recover(&self, path: &Path, progress: &mut Progress<'_>) -> bool {
        let file = self.display(path);
        let snapshot = self.snapshot.as_ref().map_err(String::as_str);
        let rev = snapshot.map_or(self.config.snapshot_ref.as_str(), Snapshot::rev);

        match recovery::ensure_present(path, snapshot, self.dry_run) {
            Recovery::Present => true,
            Recovery::Restored => {
                progress.reporter.file_restored(&file, rev, false);
                progress.summary.files_restored += 1;
                true
            }
            Recovery::WouldRestore => {
                progress.reporter.file_restored(&file, rev, true);
                progress.summary.files_restored += 1;
                false
            }
            Recovery::Failed(reason) => {
                progress.warn(format!("{file} is missing and could not be restored: {reason}"));
                false
            }
        }
    }

    fn button_patch(&self, set: &DocumentSet) -> DownloadButtonPatch {
        DownloadButtonPatch::new(
            &self.config.site.pdf_href,
            self.config.locales.button_label(&set.lang),
        )
    }

    fn patch_stylesheet(&self, set: &DocumentSet, progress: &mut Progress<'_>) -> Result<()> {
        let stylesheet = Stylesheet::load(set.stylesheet_path())?;
        let file = self.display(&stylesheet.path);
        let patch = StylesheetPatch::new(&set.files.anchor_selector, &stylesheet.path);

        let result = Self::run_file(&file, &[&patch], &stylesheet.content, progress)?;
        self.commit(&stylesheet.path, &stylesheet.content, &result, progress)
    }

    fn patch_main_page(&self, set: &DocumentSet, progress: &mut Progress<'_>) -> Result<()> {
        let document = Document::load(set.main_page_path(), &set.lang, Role::Main)?;
        let block = meta::main_head(
            &self.config.site,
            &self.config.locales,
            &set.files.stylesheet,
            &document.lang,
        )?;
        let head = HeadPatch::main(&document.lang, block);
        let button = self.button_patch(set);

        self.patch_document(&document, &[&head, &button], progress)
    }

    /// Patch one page; a main page without a head fails the run
    fn patch_document(
        &self,
        document: &Document,
        patches: &[&dyn Patch],
        progress: &mut Progress<'_>,
    ) -> Result<()> {
        let file = self.display(&document.path);
        let result = Self::run_file(&file, patches, &document.content, progress)?;

        let head_skipped = matches!(
            result.outcome(HeadPatch::NAME),
            Some(PatchOutcome::Skipped(_))
        );
        if document.role == Role::Main && head_skipped {
            return Err(SitepatchError::MainHeadMissing {
                path: document.path.display().to_string(),
            });
        }

        for (name, outcome) in &result.outcomes {
            if let PatchOutcome::Skipped(reason) = outcome {
                progress.warn(format!("{file}: {name} patch skipped ({reason})"));
            }
        }

        self.commit(&document.path, &document.content, &result, progress)
    }

    fn run_file(
        file: &str,
        patches: &[&dyn Patch],
        content: &str,
        progress: &mut Progress<'_>,
    ) -> Result<FilePatchResult> {
        let result = run_patches(patches, content)?;
        for (name, outcome) in &result.outcomes {
            progress.reporter.patch(file, name, *outcome);
        }
        Ok(result)
    }

    fn commit(
        &self,
        path: &Path,
        original: &str,
        result: &FilePatchResult,
        progress: &mut Progress<'_>,
    ) -> Result<()> {
        if result.content == original {
            progress.summary.files_unchanged += 1;
            return Ok(());
        }

        if !self.dry_run {
            write_text(path, &result.content)?;
        }
        progress
            .reporter
            .file_updated(&self.display(path), self.dry_run);
        progress.summary.files_patched += 1;
        Ok(())
    }
}
