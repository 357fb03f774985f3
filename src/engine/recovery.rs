//! Recovery guard for files the converter run may have deleted
//!
//! A missing file is restored from the snapshot. Every failure is returned
//! as [`Recovery::Failed`] so the caller can warn and move on.

use std::path::Path;

use crate::git::Snapshot;

/// Result of checking one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    Present,
    Restored,
    /// Dry run: the snapshot has the file, nothing was written
    WouldRestore,
    Failed(String),
}

/// Make sure `path` exists, restoring it from `snapshot` when it does not
///
/// `snapshot` is `Err` with a reason when no snapshot could be opened.
pub fn ensure_present(path: &Path, snapshot: Result<&Snapshot, &str>, dry_run: bool) -> Recovery {
    if path.exists() {
        return Recovery::Present;
    }

    let snapshot = match snapshot {
        Ok(snapshot) => snapshot,
        Err(reason) => return Recovery::Failed(reason.to_string()),
    };

    let attempt = if dry_run {
        snapshot.read(path).map(|_| Recovery::WouldRestore)
    } else {
        snapshot.restore(path).map(|()| Recovery::Restored)
    };
    attempt.unwrap_or_else(|e| Recovery::Failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{commit_all, create_git_repo};

    #[test]
    fn test_present_file_untouched() {
        let (_temp, root) = create_git_repo();
        let path = root.join("favicon.ico");
        std::fs::write(&path, "local").unwrap();

        assert_eq!(
            ensure_present(&path, Err("no snapshot"), false),
            Recovery::Present
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "local");
    }

    #[test]
    fn test_restore_and_dry_run() {
        let (_temp, root) = create_git_repo();
        let path = root.join("favicon.ico");
        std::fs::write(&path, [0u8, 1, 2, 3]).unwrap();
        commit_all(&root, "icon");
        std::fs::remove_file(&path).unwrap();

        let snapshot = Snapshot::open(&root, "HEAD").unwrap();

        assert_eq!(
            ensure_present(&path, Ok(&snapshot), true),
            Recovery::WouldRestore
        );
        assert!(!path.exists());

        assert_eq!(
            ensure_present(&path, Ok(&snapshot), false),
            Recovery::Restored
        );
        assert_eq!(std::fs::read(&path).unwrap(), vec![0u8, 1, 2, 3]);
    }

    #[test]
    fn test_failures_are_reported_not_raised() {
        let (_temp, root) = create_git_repo();
        std::fs::write(root.join("tracked.txt"), "x").unwrap();
        commit_all(&root, "first");
        let snapshot = Snapshot::open(&root, "HEAD").unwrap();

        let missing = root.join("portrait.jpg");
        assert!(matches!(
            ensure_present(&missing, Ok(&snapshot), false),
            Recovery::Failed(_)
        ));
        assert_eq!(
            ensure_present(&missing, Err("Not in a git repository"), false),
            Recovery::Failed("Not in a git repository".to_string())
        );
    }
}
