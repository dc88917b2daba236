//! PDF merging operations.
//!
//! This module provides the merge executor and the in-memory accumulator it
//! appends to.
//!
//! # Examples
//!
//! ```no_run
//! use foldermerge::config::CompressionProfile;
//! use foldermerge::merge::MergeExecutor;
//! use foldermerge::plan::MergePlan;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = MergePlan {
//!     candidates: vec![PathBuf::from("ClientX/A.pdf"), PathBuf::from("ClientX/B.pdf")],
//!     letters: vec![],
//!     output: PathBuf::from("ClientX/merged_ClientX.pdf"),
//! };
//!
//! let result = MergeExecutor::new(CompressionProfile::Fast).execute(&plan).await?;
//! println!("Merged {} pages", result.statistics.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod accumulator;
pub mod executor;

pub use accumulator::PageAccumulator;
pub use executor::{MergeExecutor, MergeResult, MergeStatistics, SkippedFile, SourceRole};
