//! Removal of merged sources.
//!
//! Only paths the executor confirmed as appended reach this module. A
//! failed deletion is logged and recorded; the remaining files are still
//! processed.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::utils::display_name;

/// A source that could not be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteFailure {
    /// Path of the source.
    pub path: PathBuf,

    /// Reason reported by the filesystem.
    pub reason: String,
}

/// Outcome of a cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    /// Sources removed, in the order they were processed.
    pub removed: Vec<PathBuf>,

    /// Sources left behind.
    pub failures: Vec<DeleteFailure>,
}

impl CleanupReport {
    /// Number of sources removed.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Check if every source was removed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Delete every path in `merged`.
pub async fn remove_merged(merged: &[PathBuf]) -> CleanupReport {
    let mut report = CleanupReport::default();

    for path in merged {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                debug!(file = %display_name(path), "removed merged source");
                report.removed.push(path.clone());
            }
            Err(e) => {
                warn!(file = %display_name(path), error = %e, "could not remove merged source");
                report.failures.push(DeleteFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
