//! CLI argument parsing for foldermerge.
//!
//! This module defines the command-line interface structure using `clap`.
//! Every option can also come from a `FOLDERMERGE_*` environment variable,
//! which is how the tool is usually driven from a file-manager hook.
//!
//! # Examples
//!
//! ```no_run
//! use foldermerge::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let config = cli.to_config().expect("Invalid configuration");
//! println!("Consolidating {}", config.folder.display());
//! ```

use clap::Parser;
use clap::builder::BoolishValueParser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{CompressionProfile, Config};
use crate::error::Result;
use crate::scan::NamingConvention;

/// Consolidate the PDF documents of a folder into one file.
///
/// Every PDF in the folder is merged, in file-name order, into
/// `merged_<folder>.pdf`; the merged sources are then deleted. Letter
/// documents are kept separate unless --include-letters is given, and are
/// never deleted. A folder that already holds a merged file is left alone.
#[derive(Parser, Debug)]
#[command(name = "foldermerge")]
#[command(version)]
#[command(about = "Consolidate the PDF documents of a folder into one file")]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Folder to consolidate
    #[arg(value_name = "FOLDER", env = "FOLDERMERGE_FOLDER")]
    pub folder: PathBuf,

    /// Compression profile for the merged file
    ///
    /// - fast: drop unused objects only (default)
    /// - maximum: also compress every stream; slower, smaller output
    #[arg(
        short,
        long,
        value_name = "PROFILE",
        default_value = "fast",
        env = "FOLDERMERGE_COMPRESSION"
    )]
    pub compression: String,

    /// Merge letter documents too, ahead of the other documents
    ///
    /// Letters stay on disk either way.
    /// Accepts true/false, 1/0, yes/no and on/off from the environment.
    #[arg(
        short = 'l',
        long,
        env = "FOLDERMERGE_INCLUDE_LETTERS",
        value_parser = BoolishValueParser::new()
    )]
    pub include_letters: bool,

    /// File-name prefix that marks an already merged file (case-insensitive)
    #[arg(long, value_name = "PREFIX", default_value = NamingConvention::DEFAULT_MARKER_PREFIX)]
    pub marker_prefix: String,

    /// Substring that marks a letter document (case-insensitive)
    #[arg(long, value_name = "TEXT", default_value = NamingConvention::DEFAULT_LETTER_MARKER)]
    pub letter_marker: String,

    /// Show what would be merged without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbose output - show details and debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression profile is unknown or the
    /// resulting configuration does not validate.
    pub fn to_config(&self) -> Result<Config> {
        let compression = CompressionProfile::from_str(&self.compression)?;

        let config = Config {
            folder: self.folder.clone(),
            compression,
            include_letters: self.include_letters,
            naming: NamingConvention::new(&self.marker_prefix, &self.letter_marker),
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            json: self.json,
        };

        config.validate()?;
        Ok(config)
    }
}
