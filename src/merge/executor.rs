//! Executes a merge plan.
//!
//! Inputs are appended strictly in plan order: letters first (when the plan
//! has any), then candidates. A source that fails to load or append is
//! recorded as a [`SkippedFile`] and the merge continues without it. Only
//! candidates that were appended end up in [`MergeResult::merged`], which is
//! the sole input to cleanup.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::CompressionProfile;
use crate::error::{FolderMergeError, Result};
use crate::io::{PdfReader, PdfWriter, WriteStatistics};
use crate::merge::accumulator::PageAccumulator;
use crate::plan::MergePlan;
use crate::utils::display_name;

/// Role a source played in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRole {
    /// Letter document.
    Letter,
    /// Merge candidate.
    Candidate,
}

/// A planned source that did not make it into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path of the source.
    pub path: PathBuf,

    /// Role the source had in the plan.
    pub role: SourceRole,

    /// Why it was skipped.
    pub reason: String,
}

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total size of the appended inputs.
    pub input_size: u64,

    /// Time taken to load and append all inputs.
    pub merge_time: Duration,

    /// Statistics of the output write.
    pub write: WriteStatistics,
}

/// Result of a successful merge.
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// Final output path.
    pub output: PathBuf,

    /// Candidates appended to the output, in page order. These, and only
    /// these, may be deleted afterwards.
    pub merged: Vec<PathBuf>,

    /// Letters appended to the output. They stay on disk.
    pub letters_merged: Vec<PathBuf>,

    /// Planned sources that were left out.
    pub skipped: Vec<SkippedFile>,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

/// Loads, appends and writes the documents of a plan.
#[derive(Debug, Clone, Default)]
pub struct MergeExecutor {
    reader: PdfReader,
    writer: PdfWriter,
    compression: CompressionProfile,
}

impl MergeExecutor {
    /// Create an executor writing with the given compression profile.
    pub fn new(compression: CompressionProfile) -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::new(),
            compression,
        }
    }

    /// Execute a merge plan.
    ///
    /// # Errors
    ///
    /// Returns [`FolderMergeError::NothingMerged`] if no page could be
    /// appended; no output is written in that case. Returns a write error if
    /// the output cannot be written or promoted, and
    /// [`FolderMergeError::MergeFailed`] if the accumulator breaks.
    pub async fn execute(&self, plan: &MergePlan) -> Result<MergeResult> {
        let start = Instant::now();
        let mut accumulator = PageAccumulator::new();
        let mut skipped = Vec::new();
        let mut input_size = 0;

        let mut letters_merged = Vec::new();
        for path in &plan.letters {
            if self
                .append(&mut accumulator, path, SourceRole::Letter, &mut skipped, &mut input_size)
                .await?
            {
                letters_merged.push(path.clone());
            }
        }

        let mut merged = Vec::new();
        for path in &plan.candidates {
            if self
                .append(&mut accumulator, path, SourceRole::Candidate, &mut skipped, &mut input_size)
                .await?
            {
                merged.push(path.clone());
            }
        }

        if accumulator.is_empty() {
            return Err(FolderMergeError::NothingMerged {
                attempted: plan.input_count(),
            });
        }

        let total_pages = accumulator.page_count();
        let merge_time = start.elapsed();

        info!(
            documents = accumulator.document_count(),
            pages = total_pages,
            input_bytes = input_size,
            skipped = skipped.len(),
            output = %plan.output.display(),
            "writing merged document"
        );

        let document = accumulator.finish(self.compression);
        let write = self.writer.save(document, &plan.output).await?;

        Ok(MergeResult {
            output: plan.output.clone(),
            merged,
            letters_merged,
            skipped,
            statistics: MergeStatistics {
                total_pages,
                input_size,
                merge_time,
                write,
            },
        })
    }

    /// Load and append one source. Returns whether it made it in.
    ///
    /// Recoverable failures are recorded in `skipped`; anything else is
    /// returned.
    async fn append(
        &self,
        accumulator: &mut PageAccumulator,
        path: &Path,
        role: SourceRole,
        skipped: &mut Vec<SkippedFile>,
        input_size: &mut u64,
    ) -> Result<bool> {
        let outcome = match self.reader.load(path).await {
            Ok(loaded) => {
                let size = loaded.file_size;
                accumulator.append(loaded).map(|pages| (pages, size))
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok((pages, size)) => {
                *input_size += size;
                info!(file = %display_name(path), ?role, pages, "appended");
                Ok(true)
            }
            Err(e) if e.is_recoverable() => {
                warn!(file = %display_name(path), ?role, error = %e, "skipping unreadable document");
                skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    role,
                    reason: e.to_string(),
                });
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
