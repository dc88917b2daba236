//! One consolidation run over one folder.
//!
//! Scanning → deciding → {aborted | merging → cleaning → completed}. Every
//! stage reads only what the previous one produced; the folder is listed
//! exactly once.

use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::cleanup::{self, DeleteFailure};
use crate::config::{CompressionProfile, Config};
use crate::error::Result;
use crate::merge::{MergeExecutor, SkippedFile};
use crate::plan::{AbortReason, Decision, MergePlan, RuleEngine};
use crate::scan::{Classifier, NamingConvention, Scanner};

/// Exit status of a run that stopped on a business rule.
pub const EXIT_SKIPPED: i32 = 10;

/// How a run ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Nothing was touched.
    Aborted {
        /// Rule that stopped the run.
        reason: AbortReason,
    },

    /// The plan was computed but not executed.
    DryRun {
        /// What a real run would do.
        plan: MergePlan,
    },

    /// The output was written and merged candidates were cleaned up.
    Completed {
        /// Final output path.
        output: PathBuf,
        /// Candidates folded into the output.
        merged: Vec<PathBuf>,
        /// Letters folded into the output. They remain on disk.
        letters_merged: Vec<PathBuf>,
        /// Number of candidates deleted after the merge.
        removed: usize,
        /// Pages in the output.
        pages: usize,
        /// Size of the output in bytes.
        output_size: u64,
        /// Planned inputs that could not be read.
        skipped: Vec<SkippedFile>,
        /// Merged candidates that could not be deleted.
        delete_failures: Vec<DeleteFailure>,
    },
}

impl RunOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Aborted { .. } => EXIT_SKIPPED,
            Self::DryRun { .. } | Self::Completed { .. } => 0,
        }
    }

    /// Number of sources consolidated into the output.
    pub fn consolidated(&self) -> usize {
        match self {
            Self::Completed {
                merged,
                letters_merged,
                ..
            } => merged.len() + letters_merged.len(),
            _ => 0,
        }
    }
}

/// Summary of a run, suitable for printing or serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Absolute path of the folder.
    pub folder: PathBuf,

    /// Final component of the folder path.
    pub folder_name: String,

    /// Compression profile in effect.
    pub compression: CompressionProfile,

    /// Whether letters were eligible for merging.
    pub include_letters: bool,

    /// Letter documents present in the folder.
    pub letters_found: usize,

    /// How the run ended.
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Check if letters were present and stayed out of the output.
    pub fn letters_kept_separate(&self) -> bool {
        if self.letters_found == 0 {
            return false;
        }
        match &self.outcome {
            RunOutcome::Completed { letters_merged, .. } => letters_merged.len() < self.letters_found,
            RunOutcome::DryRun { plan } => plan.letters.len() < self.letters_found,
            RunOutcome::Aborted { .. } => false,
        }
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }
}

/// Runs the stages of a consolidation.
#[derive(Debug, Clone)]
pub struct Pipeline<C = NamingConvention> {
    scanner: Scanner<C>,
    rules: RuleEngine,
    executor: MergeExecutor,
    compression: CompressionProfile,
    include_letters: bool,
    dry_run: bool,
}

impl Pipeline<NamingConvention> {
    /// Build a pipeline from a validated configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_classifier(config.naming.clone(), config)
    }
}

impl<C: Classifier> Pipeline<C> {
    /// Build a pipeline with a custom classifier.
    pub fn with_classifier(classifier: C, config: &Config) -> Self {
        Self {
            scanner: Scanner::new(classifier),
            rules: RuleEngine::new(config.include_letters),
            executor: MergeExecutor::new(config.compression),
            compression: config.compression,
            include_letters: config.include_letters,
            dry_run: config.dry_run,
        }
    }

    /// Run against one folder.
    ///
    /// # Errors
    ///
    /// Returns fatal errors only: an unusable folder, a merge in which no
    /// input could be read, or a failed write. Aborts and per-file failures
    /// are reported through the returned [`RunReport`].
    pub async fn run(&self, folder: &std::path::Path) -> Result<RunReport> {
        let snapshot = self.scanner.scan(folder).await?;
        let letters_found = snapshot.letters().count();

        let outcome = match self.rules.decide(&snapshot, self.scanner.classifier()) {
            Decision::Abort(reason) => {
                info!(folder = snapshot.folder_name(), %reason, "skipping folder");
                RunOutcome::Aborted { reason }
            }
            Decision::Merge(plan) if self.dry_run => RunOutcome::DryRun { plan },
            Decision::Merge(plan) => {
                let result = self.executor.execute(&plan).await?;
                let cleanup = cleanup::remove_merged(&result.merged).await;

                info!(
                    folder = snapshot.folder_name(),
                    merged = result.merged.len(),
                    removed = cleanup.removed_count(),
                    "folder consolidated"
                );

                RunOutcome::Completed {
                    output: result.output,
                    merged: result.merged,
                    letters_merged: result.letters_merged,
                    removed: cleanup.removed_count(),
                    pages: result.statistics.total_pages,
                    output_size: result.statistics.write.file_size,
                    skipped: result.skipped,
                    delete_failures: cleanup.failures,
                }
            }
        };

        Ok(RunReport {
            folder: snapshot.folder().to_path_buf(),
            folder_name: snapshot.folder_name().to_string(),
            compression: self.compression,
            include_letters: self.include_letters,
            letters_found,
            outcome,
        })
    }
}

/// Run a consolidation described by `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the run fails
/// fatally.
pub async fn run(config: &Config) -> Result<RunReport> {
    config.validate()?;
    Pipeline::from_config(config).run(&config.folder).await
}
