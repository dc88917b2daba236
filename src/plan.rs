//! Merge decision rules.
//!
//! [`RuleEngine::decide`] is a pure function of a [`FolderSnapshot`]: it
//! either aborts with a reason or returns the [`MergePlan`] the executor will
//! follow. Rules are evaluated in order and the first match wins:
//!
//! 1. a marker file exists → [`AbortReason::AlreadyMerged`]
//! 2. no candidates, and no letters that could be merged → [`AbortReason::NoEligibleDocuments`]
//! 3. fewer than two usable inputs → [`AbortReason::NothingToMerge`]

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::scan::{Classifier, FileRecord, FolderSnapshot};

/// Why a run stopped before merging. Aborts are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    /// The folder already holds a merged output.
    AlreadyMerged,
    /// The folder holds no document that could be merged.
    NoEligibleDocuments,
    /// Only one document would enter the merge.
    NothingToMerge,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMerged => write!(f, "already merged"),
            Self::NoEligibleDocuments => write!(f, "no eligible documents"),
            Self::NothingToMerge => write!(f, "nothing to merge"),
        }
    }
}

/// Ordered inputs and output of a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergePlan {
    /// Candidate documents, sorted by file name. This is the page order.
    pub candidates: Vec<PathBuf>,

    /// Letter documents merged ahead of the candidates, sorted by file name.
    /// Empty unless letter inclusion is enabled.
    pub letters: Vec<PathBuf>,

    /// Final output path inside the scanned folder.
    pub output: PathBuf,
}

impl MergePlan {
    /// Number of documents the plan will try to append.
    pub fn input_count(&self) -> usize {
        self.candidates.len() + self.letters.len()
    }
}

/// Outcome of the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Stop without side effects.
    Abort(AbortReason),
    /// Proceed with the plan.
    Merge(MergePlan),
}

/// Applies the merge rules to a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine {
    include_letters: bool,
}

impl RuleEngine {
    /// Create a rule engine.
    ///
    /// With `include_letters` set, letter documents count as merge inputs.
    pub fn new(include_letters: bool) -> Self {
        Self { include_letters }
    }

    /// Decide what to do with a folder.
    pub fn decide<C: Classifier>(&self, snapshot: &FolderSnapshot, classifier: &C) -> Decision {
        let decision = self.evaluate(snapshot, classifier);

        match &decision {
            Decision::Abort(reason) => {
                debug!(folder = snapshot.folder_name(), %reason, "merge aborted");
            }
            Decision::Merge(plan) => {
                debug!(
                    folder = snapshot.folder_name(),
                    candidates = plan.candidates.len(),
                    letters = plan.letters.len(),
                    output = %plan.output.display(),
                    "merge planned"
                );
            }
        }

        decision
    }

    fn evaluate<C: Classifier>(&self, snapshot: &FolderSnapshot, classifier: &C) -> Decision {
        if snapshot.has_marker() {
            return Decision::Abort(AbortReason::AlreadyMerged);
        }

        let candidates = paths(snapshot.candidates());
        let letters = if self.include_letters {
            paths(snapshot.letters())
        } else {
            Vec::new()
        };

        if candidates.is_empty() && letters.is_empty() {
            return Decision::Abort(AbortReason::NoEligibleDocuments);
        }

        if candidates.len() + letters.len() < 2 {
            return Decision::Abort(AbortReason::NothingToMerge);
        }

        let output = snapshot
            .folder()
            .join(classifier.output_file_name(snapshot.folder_name()));

        Decision::Merge(MergePlan {
            candidates,
            letters,
            output,
        })
    }
}

// Snapshot iterators are already name-sorted.
fn paths<'a>(records: impl Iterator<Item = &'a FileRecord>) -> Vec<PathBuf> {
    records.map(|record| record.path.clone()).collect()
}
