//! Common test utilities for sitepatch integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary assets every document set carries
#[allow(dead_code)]
pub const ASSETS: [&str; 7] = [
    "favicon.ico",
    "favicon-16x16.png",
    "favicon-32x32.png",
    "apple-touch-icon.png",
    "android-chrome-192x192.png",
    "android-chrome-512x512.png",
    "portrait.jpg",
];

/// A test workspace holding a converter-shaped site
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Create a workspace with both document sets, committed to git
    #[allow(dead_code)]
    pub fn with_committed_site() -> Self {
        let workspace = Self::new();
        workspace.init_git();
        workspace.init_set("en");
        workspace.init_set("es");
        workspace.commit_all("converter output");
        workspace
    }

    /// Copy the fixture site into `dir` and write its binary assets
    #[allow(dead_code)]
    pub fn init_set(&self, dir: &str) {
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("site");
        let target = self.path.join(dir);
        std::fs::create_dir_all(&target).expect("Failed to create set directory");

        for entry in std::fs::read_dir(&fixture_path).expect("Failed to read fixture site") {
            let entry = entry.expect("Failed to read fixture entry");
            std::fs::copy(entry.path(), target.join(entry.file_name()))
                .expect("Failed to copy fixture file");
        }

        for asset in ASSETS {
            std::fs::write(target.join(asset), asset_bytes(asset)).expect("Failed to write asset");
        }
    }

    /// Initialize a git repository at the workspace root
    #[allow(dead_code)]
    pub fn init_git(&self) {
        git2::Repository::init(&self.path).expect("Failed to init git repository");
    }

    /// Stage everything and commit
    #[allow(dead_code)]
    pub fn commit_all(&self, message: &str) {
        let repo = git2::Repository::open(&self.path).expect("Failed to open repository");
        let mut index = repo.index().expect("Failed to open index");
        index
            .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
            .expect("Failed to stage files");
        index.write().expect("Failed to write index");

        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = repo.find_tree(tree_id).expect("Failed to find tree");
        let signature = git2::Signature::now("sitepatch tests", "tests@example.org")
            .expect("Invalid signature");
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
        .expect("Failed to commit");
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read raw bytes of a file from workspace
    #[allow(dead_code)]
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Remove a file from workspace
    #[allow(dead_code)]
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Every file outside `.git` with its bytes, sorted by path
    #[allow(dead_code)]
    pub fn snapshot(&self) -> Vec<(PathBuf, Vec<u8>)> {
        let mut files = Vec::new();
        collect_files(&self.path, &mut files).expect("Failed to walk workspace");
        files.sort();
        files
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic non-UTF-8 content for an asset
#[allow(dead_code)]
pub fn asset_bytes(asset: &str) -> Vec<u8> {
    let mut bytes = vec![0x89, 0x00, 0xff, 0xfe];
    bytes.extend_from_slice(asset.as_bytes());
    bytes
}

fn collect_files(dir: &Path, files: &mut Vec<(PathBuf, Vec<u8>)>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_name() == ".git" {
            continue;
        }
        if entry.file_type()?.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push((path.clone(), std::fs::read(&path)?));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_committed_site_layout() {
        let workspace = TestWorkspace::with_committed_site();
        for set in ["en", "es"] {
            for file in ["main.css", "main.html", "main1.html", "main2.html", "index.html"] {
                assert!(workspace.file_exists(&format!("{set}/{file}")));
            }
            assert_eq!(
                workspace.read_bytes(&format!("{set}/favicon.ico")),
                asset_bytes("favicon.ico")
            );
        }
        assert!(git2::Repository::open(&workspace.path).unwrap().head().is_ok());
    }
}
