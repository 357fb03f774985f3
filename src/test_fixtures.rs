//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helper functions to create common test environments
//! (temp directories, git repos with commits, converter-shaped sites) with a
//! single function call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_git_repo, commit_all, write_site};
//!
//! #[test]
//! fn my_test() {
//!     let (temp, root) = create_git_repo();
//!     write_site(&root);
//!     commit_all(&root, "converter output");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Stylesheet as emitted by the converter, with the default anchor rule
pub const CONVERTER_CSS: &str = "\
/* start css.sty */
body { margin: 0 auto; max-width: 50em; }
p.noindent { text-indent: 0em }
div.figure {
  margin-left: auto;
  margin-right: auto;
}
span.ecbx-1000 { font-weight: bold; }
/* end css.sty */
";

/// Page in the converter's legacy XHTML shape
pub fn converter_page(title: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n\
<html xmlns=\"http://www.w3.org/1999/xhtml\">\n\
<head><title>{title}</title>\n\
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\" />\n\
<meta name=\"generator\" content=\"TeX4ht\" />\n\
<link rel='stylesheet' type='text/css' href='main.css' />\n\
</head><body>\n\
{body}\n\
</body></html>\n"
    )
}

/// Hand-written landing page
pub const LANDING_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<title>Home</title>\n</head>\n<body>\n<p>Welcome</p>\n</body>\n</html>\n";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a temp directory with a git repository initialized.
///
/// Returns the `TempDir` (which cleans up on drop) and the path to the repo.
///
/// # Panics
///
/// Panics if the temp directory or git repository cannot be created.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().to_path_buf();
    git2::Repository::init(&path).expect("Failed to init git repository");
    (temp, path)
}

/// Stage every change in the working tree and commit it.
///
/// # Panics
///
/// Panics if any git operation fails.
pub fn commit_all(repo_path: &Path, message: &str) -> git2::Oid {
    let repo = git2::Repository::open(repo_path).expect("Failed to open repository");
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index
        .update_all(["*"], None)
        .expect("Failed to stage deletions");
    index.write().expect("Failed to write index");

    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature =
        git2::Signature::now("sitepatch tests", "tests@example.org").expect("Invalid signature");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .expect("Failed to commit")
}

/// Write one converter-shaped document set into `dir`.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_document_set(dir: &Path) {
    std::fs::create_dir_all(dir).expect("Failed to create set directory");
    std::fs::write(dir.join("main.css"), CONVERTER_CSS).expect("Failed to write stylesheet");
    std::fs::write(
        dir.join("main.html"),
        converter_page("Main", "<p>Contents</p>"),
    )
    .expect("Failed to write main page");
    std::fs::write(
        dir.join("main1.html"),
        converter_page("Section 1", "<p>First</p>"),
    )
    .expect("Failed to write page");
    std::fs::write(
        dir.join("main2.html"),
        converter_page("Section 2", "<p>Second</p>"),
    )
    .expect("Failed to write page");
    std::fs::write(dir.join("index.html"), LANDING_PAGE).expect("Failed to write landing page");

    for asset in [
        "favicon.ico",
        "favicon-16x16.png",
        "favicon-32x32.png",
        "apple-touch-icon.png",
        "android-chrome-192x192.png",
        "android-chrome-512x512.png",
        "portrait.jpg",
    ] {
        std::fs::write(dir.join(asset), format!("binary:{asset}").as_bytes())
            .expect("Failed to write asset");
    }
}

/// Write both default document sets (`en/` and `es/`) under `root`.
pub fn write_site(root: &Path) {
    write_document_set(&root.join("en"));
    write_document_set(&root.join("es"));
}
