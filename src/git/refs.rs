//! Git reference resolution for the snapshot revision

use git2::{Commit, Repository};

use crate::error::{Result, SitepatchError};

/// Resolve a revision (branch, tag, SHA or revspec such as `HEAD~1`) to a
/// commit
pub fn resolve_commit<'a>(repo: &'a Repository, rev: &str) -> Result<Commit<'a>> {
    if rev == "HEAD" {
        return repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| SitepatchError::SnapshotRevisionFailed {
                rev: rev.to_string(),
                reason: e.message().to_string(),
            });
    }

    let ref_candidates = [
        format!("refs/heads/{rev}"),
        format!("refs/tags/{rev}"),
        format!("refs/remotes/origin/{rev}"),
    ];

    for candidate in &ref_candidates {
        if let Ok(reference) = repo.find_reference(candidate) {
            if let Ok(commit) = reference.peel_to_commit() {
                return Ok(commit);
            }
        }
    }

    repo.revparse_single(rev)
        .and_then(|object| object.peel_to_commit())
        .map_err(|e| SitepatchError::SnapshotRevisionFailed {
            rev: rev.to_string(),
            reason: e.message().to_string(),
        })
}
