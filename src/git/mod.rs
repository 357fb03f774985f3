//! Snapshot recovery from git history
//!
//! Deleted binary assets and the landing page are restored from the tree of
//! a committed revision (`HEAD` unless configured otherwise). The working
//! tree is only written for the single file being restored; the index and
//! refs are never touched.

pub mod refs;

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::{Result, SitepatchError};

/// Read access to one committed revision of the workspace repository
pub struct Snapshot {
    repo: Repository,
    workdir: PathBuf,
    rev: String,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("workdir", &self.workdir)
            .field("rev", &self.rev)
            .finish_non_exhaustive()
    }
}

impl Snapshot {
    /// Open the repository containing `workspace`
    ///
    /// The revision is resolved eagerly so a missing history is reported
    /// once, up front.
    pub fn open(workspace: &Path, rev: &str) -> Result<Self> {
        let repo =
            Repository::discover(workspace).map_err(|_| SitepatchError::NotInGitRepository {
                path: workspace.display().to_string(),
            })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| SitepatchError::NotInGitRepository {
                path: workspace.display().to_string(),
            })?;
        let workdir = dunce::canonicalize(workdir)?;

        refs::resolve_commit(&repo, rev)?;

        Ok(Self {
            repo,
            workdir,
            rev: rev.to_string(),
        })
    }

    pub fn rev(&self) -> &str {
        &self.rev
    }

    /// Path of `path` relative to the repository root
    fn relative(&self, path: &Path) -> Result<PathBuf> {
        let parent = path.parent().unwrap_or(Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| SitepatchError::SnapshotEntryMissing {
                path: path.display().to_string(),
                rev: self.rev.clone(),
            })?;

        let parent = dunce::canonicalize(parent)?;
        let relative = parent
            .join(file_name)
            .strip_prefix(&self.workdir)
            .map(Path::to_path_buf)
            .map_err(|_| SitepatchError::SnapshotEntryMissing {
                path: path.display().to_string(),
                rev: self.rev.clone(),
            })?;
        Ok(relative)
    }

    /// Committed bytes of a workspace file
    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let relative = self.relative(path)?;
        let missing = || SitepatchError::SnapshotEntryMissing {
            path: crate::path_utils::to_forward_slashes(&relative),
            rev: self.rev.clone(),
        };

        let commit = refs::resolve_commit(&self.repo, &self.rev)?;
        let tree = commit.tree()?;
        let entry = tree.get_path(&relative).map_err(|_| missing())?;
        let blob = entry
            .to_object(&self.repo)?
            .peel_to_blob()
            .map_err(|_| missing())?;
        Ok(blob.content().to_vec())
    }

    /// Write the committed version of `path` back to the working tree
    pub fn restore(&self, path: &Path) -> Result<()> {
        let bytes = self.read(path)?;
        std::fs::write(path, bytes).map_err(|e| SitepatchError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
