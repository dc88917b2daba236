//! I/O operations for foldermerge.
//!
//! This module handles all document I/O:
//! - Loading source PDFs from disk
//! - Writing the merged PDF through a temporary file and an atomic rename
//!
//! # Examples
//!
//! ```no_run
//! use foldermerge::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::new().load(Path::new("A.pdf")).await?;
//! PdfWriter::new()
//!     .save(loaded.document, Path::new("copy.pdf"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteStatistics};
