//! Configuration module for foldermerge.
//!
//! The CLI layer turns arguments and environment variables into a [`Config`],
//! which is the only input the pipeline reads. Nothing in the library looks
//! at ambient state.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FolderMergeError, Result};
use crate::scan::NamingConvention;

/// Compression profile for the merged output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionProfile {
    /// Drop unreferenced objects and renumber. Streams are left as they are.
    #[default]
    Fast,
    /// Additionally deflate every stream and drop empty ones. Slower, smaller.
    Maximum,
}

impl CompressionProfile {
    /// Name used on the command line and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Maximum => "maximum",
        }
    }
}

impl FromStr for CompressionProfile {
    type Err = FolderMergeError;

    /// Parse a profile from `"fast"` or `"maximum"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "maximum" | "max" => Ok(Self::Maximum),
            _ => Err(FolderMergeError::invalid_config(format!(
                "Invalid compression profile: {s}. Must be one of: fast, maximum"
            ))),
        }
    }
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder to consolidate.
    pub folder: PathBuf,

    /// Compression profile for the merged output.
    pub compression: CompressionProfile,

    /// Fold letter documents into the output. They are never deleted either way.
    pub include_letters: bool,

    /// File naming rules used for classification and the output name.
    pub naming: NamingConvention,

    /// Decide and report the plan without touching any file.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Print the run report as JSON instead of a status line.
    pub json: bool,
}

impl Config {
    /// Create a configuration with defaults for everything but the folder.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            compression: CompressionProfile::default(),
            include_letters: false,
            naming: NamingConvention::default(),
            dry_run: false,
            verbose: false,
            quiet: false,
            json: false,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The folder path is empty
    /// - Verbose and quiet modes are both enabled
    /// - The naming convention is unusable
    pub fn validate(&self) -> Result<()> {
        if self.folder.as_os_str().is_empty() {
            return Err(FolderMergeError::invalid_config("No folder specified"));
        }

        if self.verbose && self.quiet {
            return Err(FolderMergeError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        self.naming.validate()
    }

    /// Check if human-readable output should be displayed.
    pub fn should_print(&self) -> bool {
        !self.json && (!self.quiet || self.dry_run)
    }
}
