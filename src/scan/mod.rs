//! Folder scanning.
//!
//! A scan reads the target directory exactly once and turns every entry into
//! a classified [`FileRecord`]. The resulting [`FolderSnapshot`] is the only
//! view of the folder the rest of the run gets to see.
//!
//! # Examples
//!
//! ```no_run
//! use foldermerge::scan::{NamingConvention, Scanner};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = Scanner::new(NamingConvention::default());
//! let snapshot = scanner.scan(Path::new("ClientX")).await?;
//! println!("{} candidate(s)", snapshot.candidates().count());
//! # Ok(())
//! # }
//! ```

pub mod classifier;

pub use classifier::{Classification, Classifier, NamingConvention};

use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::{FolderMergeError, Result};

/// One directory entry and its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Entry name inside the folder.
    pub name: String,

    /// Absolute path of the entry.
    pub path: PathBuf,

    /// Role assigned by the classifier.
    pub classification: Classification,
}

/// Everything observed in one read of a folder.
///
/// Records are kept sorted by name, so every accessor yields entries in the
/// order they would be merged.
#[derive(Debug, Clone)]
pub struct FolderSnapshot {
    folder: PathBuf,
    folder_name: String,
    records: Vec<FileRecord>,
}

impl FolderSnapshot {
    /// Build a snapshot from already classified records.
    pub fn new(folder: PathBuf, folder_name: impl Into<String>, mut records: Vec<FileRecord>) -> Self {
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            folder,
            folder_name: folder_name.into(),
            records,
        }
    }

    /// Canonical path of the scanned folder.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Final component of the folder path.
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// All records, sorted by name.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Records with the given classification, sorted by name.
    pub fn with_classification(
        &self,
        classification: Classification,
    ) -> impl Iterator<Item = &FileRecord> {
        self.records
            .iter()
            .filter(move |record| record.classification == classification)
    }

    /// Outputs of earlier runs.
    pub fn markers(&self) -> impl Iterator<Item = &FileRecord> {
        self.with_classification(Classification::MergedMarker)
    }

    /// Letter documents.
    pub fn letters(&self) -> impl Iterator<Item = &FileRecord> {
        self.with_classification(Classification::LetterDocument)
    }

    /// Merge candidates.
    pub fn candidates(&self) -> impl Iterator<Item = &FileRecord> {
        self.with_classification(Classification::MergeCandidate)
    }

    /// Ignored entries.
    pub fn ignored(&self) -> impl Iterator<Item = &FileRecord> {
        self.with_classification(Classification::Ignored)
    }

    /// Check if an earlier run already produced an output here.
    pub fn has_marker(&self) -> bool {
        self.markers().next().is_some()
    }
}

/// Reads a folder and classifies its entries.
#[derive(Debug, Clone)]
pub struct Scanner<C = NamingConvention> {
    classifier: C,
}

impl<C: Classifier> Scanner<C> {
    /// Create a scanner using the given classifier.
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Returns the classifier.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Scan a folder.
    ///
    /// Only immediate entries are listed. Entries that are not regular files
    /// (after following symlinks) are recorded as [`Classification::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`FolderMergeError::NotADirectory`] if the path does not exist,
    /// is not a directory, or has no final component to name the output
    /// after. Returns [`FolderMergeError::ScanFailed`] if listing fails.
    pub async fn scan(&self, folder: &Path) -> Result<FolderSnapshot> {
        let metadata = tokio::fs::metadata(folder)
            .await
            .map_err(|e| FolderMergeError::not_a_directory(folder.to_path_buf(), e.to_string()))?;

        if !metadata.is_dir() {
            return Err(FolderMergeError::not_a_directory(
                folder.to_path_buf(),
                "path exists but is not a directory",
            ));
        }

        // The output is named after the folder the caller asked for, so a
        // symlinked folder keeps its own name. Listing uses the resolved path.
        let folder_name = folder_name(folder)?;

        let folder = tokio::fs::canonicalize(folder)
            .await
            .map_err(|e| FolderMergeError::not_a_directory(folder.to_path_buf(), e.to_string()))?;

        let scan_failed = |source| FolderMergeError::ScanFailed {
            path: folder.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&folder).await.map_err(scan_failed)?;
        let mut records = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(scan_failed)? {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            // Broken symlinks and other unreadable entries count as non-files.
            let is_file = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata.is_file(),
                Err(e) => {
                    debug!(file = %name, error = %e, "cannot stat entry, ignoring it");
                    false
                }
            };

            let classification = if is_file {
                self.classifier.classify(&name)
            } else {
                Classification::Ignored
            };

            debug!(file = %name, ?classification, "classified entry");

            records.push(FileRecord {
                name,
                path,
                classification,
            });
        }

        let snapshot = FolderSnapshot::new(folder, folder_name, records);

        debug!(
            folder = %snapshot.folder().display(),
            entries = snapshot.records().len(),
            markers = snapshot.markers().count(),
            letters = snapshot.letters().count(),
            candidates = snapshot.candidates().count(),
            "scanned folder"
        );

        Ok(snapshot)
    }
}

/// Final component of `folder` after lexical normalization.
///
/// `.` and `..` are resolved without touching the filesystem, so symlinks
/// along the path are not followed.
fn folder_name(folder: &Path) -> Result<String> {
    let absolute = std::path::absolute(folder)
        .map_err(|e| FolderMergeError::not_a_directory(folder.to_path_buf(), e.to_string()))?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    normalized
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FolderMergeError::not_a_directory(folder.to_path_buf(), "folder has no name"))
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(NamingConvention::default())
    }
}
