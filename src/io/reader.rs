//! PDF reading and loading operations.
//!
//! Loading is where per-file failures surface. Every error returned here is
//! recoverable in the sense of [`FolderMergeError::is_recoverable`]: the
//! caller skips the file and carries on with the rest of the plan.
//!
//! # Examples
//!
//! ```no_run
//! use foldermerge::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("A.pdf")).await?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{FolderMergeError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// Loads source documents and rejects those that cannot be merged.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no pages
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let start = Instant::now();

        let bytes = tokio::fs::read(&path_buf)
            .await
            .map_err(|e| FolderMergeError::failed_to_load_pdf(path_buf.clone(), e.to_string()))?;

        let document = Document::load_mem(&bytes).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                FolderMergeError::encrypted_pdf(path_buf.clone())
            } else {
                FolderMergeError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        if document.is_encrypted() {
            return Err(FolderMergeError::encrypted_pdf(path_buf));
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(FolderMergeError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        Ok(LoadedPdf {
            document,
            path: path_buf,
            page_count,
            load_time: start.elapsed(),
            file_size: bytes.len() as u64,
        })
    }
}
