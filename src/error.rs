//! Error types for foldermerge.
//!
//! Errors fall in two groups. Per-file failures (a source PDF that cannot be
//! read) are recoverable: the merge executor records them and moves on.
//! Everything else ends the run and maps to a process exit code the caller
//! can act on.
//!
//! # Error Categories
//!
//! - **Input Errors**: the target folder is missing or not a directory
//! - **PDF Errors**: unreadable, corrupted or encrypted source documents
//! - **Merge Errors**: nothing could be merged, or the accumulator broke
//! - **Write Errors**: the output could not be written or promoted

use std::io;
use std::path::PathBuf;

/// Result type alias for foldermerge operations.
pub type Result<T> = std::result::Result<T, FolderMergeError>;

/// Main error type for foldermerge operations.
#[derive(Debug, thiserror::Error)]
pub enum FolderMergeError {
    /// Target path does not exist or is not a directory.
    #[error("Not a directory: {}\n  Reason: {reason}", .path.display())]
    NotADirectory {
        /// Path supplied by the caller.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// Listing the folder failed part way through.
    #[error("Failed to scan folder: {}\n  Reason: {source}", .path.display())]
    ScanFailed {
        /// Folder being scanned.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A source PDF could not be read or parsed.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// A source PDF parsed but its structure is unusable.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", .path.display())]
    CorruptedPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// A source PDF is encrypted.
    #[error("PDF is encrypted and cannot be merged: {}", .path.display())]
    EncryptedPdf {
        /// Path to the PDF file.
        path: PathBuf,
    },

    /// Every planned input failed to load, so there is nothing to write.
    #[error("No pages merged: all {attempted} planned document(s) failed to load")]
    NothingMerged {
        /// Number of documents the plan tried to append.
        attempted: usize,
    },

    /// The output accumulator is in an unusable state.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// The temporary output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Serializing, flushing or renaming the output failed.
    #[error("Failed to write output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },
}

impl FolderMergeError {
    /// Create a NotADirectory error.
    pub fn not_a_directory(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::NotADirectory {
            path,
            reason: reason.into(),
        }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error only affects a single source file.
    ///
    /// Recoverable errors shrink the merged set; they never end the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FailedToLoadPdf { .. } | Self::CorruptedPdf { .. } | Self::EncryptedPdf { .. }
        )
    }

    /// Check if this error must end the run.
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotADirectory { .. } => 2,
            Self::ScanFailed { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::CorruptedPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::NothingMerged { .. } => 6,
            Self::MergeFailed { .. } => 6,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::InvalidConfig { .. } => 1,
        }
    }
}
