//! PDF writing and saving operations.
//!
//! Output is written next to its final path under a hidden temporary name,
//! flushed and synced, then renamed over the final path. A reader of the
//! folder therefore sees either no output, the previous output, or the
//! complete new one.
//!
//! The temporary name starts with a dot and does not end in `.pdf`, so a
//! leftover from an interrupted run is never mistaken for a marker or a
//! merge candidate.
//!
//! # Examples
//!
//! ```no_run
//! use foldermerge::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let stats = writer.save(doc, Path::new("ClientX/merged_ClientX.pdf")).await?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;
use tracing::{debug, warn};

use crate::error::{FolderMergeError, Result};

/// Suffix appended to the hidden temporary output name.
pub const TEMP_SUFFIX: &str = "partial";

/// Buffer size for writing (in bytes).
const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        crate::utils::format_file_size(self.file_size)
    }
}

/// Writes documents through a temporary sibling and an atomic rename.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Path of the temporary file used while writing `path`.
    pub fn temp_path_for(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(".{name}.{TEMP_SUFFIX}"))
    }

    /// Save a PDF document and return statistics about the operation.
    ///
    /// A stale temporary file left by an earlier interrupted run is removed
    /// first. If anything fails after that, the temporary file is removed
    /// again and the final path is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`FolderMergeError::FailedToCreateOutput`] if the temporary
    /// file cannot be created and [`FolderMergeError::FailedToWrite`] if
    /// serialization, flushing or the final rename fails.
    pub async fn save(&self, doc: Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let write_path = Self::temp_path_for(path);
        self.remove_if_exists(&write_path).await?;

        let target = write_path.clone();

        let result = task::spawn_blocking(move || {
            let start = Instant::now();
            write_document(doc, &target, WRITE_BUFFER_SIZE)?;

            std::fs::rename(&target, &path_buf).map_err(|e| FolderMergeError::FailedToWrite {
                path: path_buf.clone(),
                source: e,
            })?;

            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

            Ok::<_, FolderMergeError>(WriteStatistics {
                write_time: start.elapsed(),
                file_size,
                output_path: path_buf,
            })
        })
        .await
        .map_err(|e| FolderMergeError::merge_failed(format!("Write task failed: {e}")))
        .and_then(|inner| inner);

        if result.is_err() {
            if let Err(e) = tokio::fs::remove_file(&write_path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %write_path.display(), error = %e, "could not remove temporary output");
                }
            }
        }

        let stats = result?;
        debug!(
            path = %stats.output_path.display(),
            size = %stats.format_file_size(),
            "output written"
        );

        Ok(stats)
    }

    /// Check if output file exists.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    /// Safely remove a file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub async fn remove_if_exists(&self, path: &Path) -> Result<()> {
        if self.exists(path).await {
            debug!(path = %path.display(), "removing stale temporary output");
            tokio::fs::remove_file(path)
                .await
                .map_err(|e| FolderMergeError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }
}

fn write_document(mut doc: Document, path: &Path, buffer_size: usize) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| FolderMergeError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_failed = |source: std::io::Error| FolderMergeError::FailedToWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = std::io::BufWriter::with_capacity(buffer_size, file);
    doc.save_to(&mut writer)
        .map_err(|e| write_failed(std::io::Error::other(e)))?;
    writer.flush().map_err(write_failed)?;

    let file = writer.into_inner().map_err(|e| write_failed(e.into_error()))?;
    file.sync_all().map_err(write_failed)?;

    Ok(())
}
