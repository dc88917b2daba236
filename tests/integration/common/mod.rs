//! Shared helpers for foldermerge integration tests.
//!
//! PDF fixtures come from the same tagged-page builder the unit tests use,
//! so a test can read back which source page ended up where in the output.

#![allow(dead_code)]

use lopdf::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use foldermerge::Config;

#[path = "../../../src/io/testing.rs"]
mod fixtures;

/// A scratch folder with a chosen final component.
pub struct TestFolder {
    _root: TempDir,
    path: PathBuf,
}

impl TestFolder {
    /// Create an empty folder called `name` inside a fresh temp dir.
    pub fn new(name: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let path = root.path().join(name);
        fs::create_dir(&path).expect("Failed to create test folder");
        // Runs report canonical paths.
        let path = fs::canonicalize(&path).expect("Failed to canonicalize test folder");
        Self { _root: root, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Write a PDF with `pages` pages tagged after its file stem.
    pub fn pdf(&self, name: &str, pages: usize) -> PathBuf {
        let path = self.join(name);
        let tag = Path::new(name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        fixtures::write_tagged_pdf(&path, &tag, pages);
        path
    }

    /// Write arbitrary bytes.
    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    /// Sorted names of the folder's entries.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.path)
            .expect("Failed to list folder")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Default configuration for this folder.
    pub fn config(&self) -> Config {
        Config::new(&self.path)
    }
}

/// Page tags of the PDF at `path`, in page order.
pub fn page_tags(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("Failed to load merged output");
    fixtures::page_tags(&doc)
}

/// Strings as owned, for comparing with [`page_tags`].
pub fn tags(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| s.to_string()).collect()
}
