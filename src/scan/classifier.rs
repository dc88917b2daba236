//! File name classification.
//!
//! The rules live behind the [`Classifier`] trait so a different naming
//! convention can be dropped in without touching planning, merging or
//! cleanup.

use serde::Serialize;

use crate::error::{FolderMergeError, Result};

/// Role of a directory entry in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    /// Output of a previous run. Its presence stops the run.
    MergedMarker,
    /// Letter document: never deleted, merged only on request.
    LetterDocument,
    /// Document eligible for merging.
    MergeCandidate,
    /// Anything else, including entries that are not regular files.
    Ignored,
}

/// Decides the role of each file name and how the output is named.
///
/// Implementations must keep [`Classifier::output_file_name`] consistent
/// with [`Classifier::classify`]: the produced output has to classify as a
/// [`Classification::MergedMarker`], otherwise a second run would merge again.
pub trait Classifier {
    /// Classify a plain file name (no directory components).
    fn classify(&self, file_name: &str) -> Classification;

    /// Name of the merged output for a folder called `folder_name`.
    fn output_file_name(&self, folder_name: &str) -> String;
}

/// Default naming convention.
///
/// Precedence, all comparisons case-insensitive:
/// 1. name starts with the marker prefix → marker
/// 2. name lacks the document extension → ignored
/// 3. name contains the letter marker → letter
/// 4. otherwise → candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    marker_prefix: String,
    letter_marker: String,
    suffix: String,
}

impl NamingConvention {
    /// Prefix identifying an already merged output.
    pub const DEFAULT_MARKER_PREFIX: &'static str = "MERGED";

    /// Substring identifying a letter document.
    pub const DEFAULT_LETTER_MARKER: &'static str = "CARTA";

    /// Extension of the supported document type.
    pub const EXTENSION: &'static str = "pdf";

    /// Create a convention with custom markers.
    ///
    /// Markers are stored uppercased; call [`NamingConvention::validate`]
    /// before use.
    pub fn new(marker_prefix: impl Into<String>, letter_marker: impl Into<String>) -> Self {
        Self {
            marker_prefix: marker_prefix.into().trim().to_uppercase(),
            letter_marker: letter_marker.into().trim().to_uppercase(),
            suffix: format!(".{}", Self::EXTENSION.to_uppercase()),
        }
    }

    /// Reject markers that would classify everything the same way.
    pub fn validate(&self) -> Result<()> {
        if self.marker_prefix.is_empty() {
            return Err(FolderMergeError::invalid_config(
                "Marker prefix cannot be empty",
            ));
        }

        if self.letter_marker.is_empty() {
            return Err(FolderMergeError::invalid_config(
                "Letter marker cannot be empty",
            ));
        }

        if self.marker_prefix.contains(['/', '\\']) {
            return Err(FolderMergeError::invalid_config(format!(
                "Marker prefix cannot contain path separators: {}",
                self.marker_prefix
            )));
        }

        Ok(())
    }

    /// Returns the marker prefix (uppercased).
    pub fn marker_prefix(&self) -> &str {
        &self.marker_prefix
    }

    /// Returns the letter marker (uppercased).
    pub fn letter_marker(&self) -> &str {
        &self.letter_marker
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARKER_PREFIX, Self::DEFAULT_LETTER_MARKER)
    }
}

impl Classifier for NamingConvention {
    fn classify(&self, file_name: &str) -> Classification {
        let upper = file_name.to_uppercase();

        if upper.starts_with(&self.marker_prefix) {
            return Classification::MergedMarker;
        }

        if !upper.ends_with(&self.suffix) {
            return Classification::Ignored;
        }

        if upper.contains(&self.letter_marker) {
            Classification::LetterDocument
        } else {
            Classification::MergeCandidate
        }
    }

    fn output_file_name(&self, folder_name: &str) -> String {
        format!(
            "{}_{}.{}",
            self.marker_prefix.to_lowercase(),
            folder_name,
            Self::EXTENSION
        )
    }
}
