//! # foldermerge
//!
//! Consolidate the PDF documents of a folder into a single merged file.
//!
//! A run lists the folder once, classifies every entry by name, decides
//! whether to merge, appends the eligible documents in file-name order into
//! `merged_<folder>.pdf`, and finally deletes exactly the sources that made it
//! into the output. Letter documents are never deleted; a folder that already
//! contains a merged file is left untouched.
//!
//! ## Example
//!
//! ```no_run
//! use foldermerge::config::Config;
//!
//! # async fn example() -> foldermerge::Result<()> {
//! let report = foldermerge::run(&Config::new("ClientX")).await?;
//! println!("{}", foldermerge::output::status_line(&report));
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod plan;
pub mod scan;
pub(crate) mod utils;

pub use config::{CompressionProfile, Config};
pub use error::{FolderMergeError, Result};
pub use pipeline::{Pipeline, RunOutcome, RunReport, run};
pub use plan::{AbortReason, MergePlan};
pub use scan::{Classification, Classifier, NamingConvention};

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
