//! Message formatting and display.
//!
//! This module provides formatted output for different message types
//! with support for quiet and verbose modes, plus the one-line status
//! printed at the end of every run.
//!
//! # Examples
//!
//! ```
//! use foldermerge::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Scanning ClientX...");
//! formatter.success("ClientX: consolidated 2 document(s)");
//! formatter.error("Something went wrong");
//! ```

use std::io;

use crate::config::Config;
use crate::pipeline::{RunOutcome, RunReport};
use crate::utils::{display_name, format_file_size};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

/// Output formatter with configurable verbosity.
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress non-error output
    /// * `verbose` - Show verbose output
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter from configuration.
    ///
    /// A dry run always prints its plan, even in quiet mode.
    pub fn from_config(config: &Config) -> Self {
        Self::new(!config.should_print(), config.verbose)
    }

    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning message.
    ///
    /// Always displayed (even in quiet mode).
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error message. Always displayed, on stderr.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Print a debug/verbose message. Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let (prefix, color_code) = match level {
            MessageLevel::Info => ("", ""),
            MessageLevel::Success => ("✓ ", "\x1b[32m"), // Green
            MessageLevel::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            MessageLevel::Error => ("✗ ", "\x1b[31m"),   // Red
            MessageLevel::Debug => ("→ ", "\x1b[36m"),   // Cyan
        };

        let line = if self.colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}\x1b[0m")
        } else {
            format!("{prefix}{message}")
        };

        if level == MessageLevel::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    /// Print detailed information. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a list item. Suppressed in quiet mode.
    pub fn list_item(&self, index: usize, message: &str) {
        if !self.quiet {
            println!("  {index}. {message}");
        }
    }

    /// Print the outcome of a run.
    ///
    /// The status line always comes first; per-file warnings and verbose
    /// details follow it.
    pub fn display_report(&self, report: &RunReport) {
        let status = status_line(report);

        match &report.outcome {
            RunOutcome::Aborted { .. } => self.info(&status),
            RunOutcome::DryRun { plan } => {
                self.info(&status);
                for (i, path) in plan.letters.iter().chain(&plan.candidates).enumerate() {
                    self.list_item(i + 1, &display_name(path));
                }
            }
            RunOutcome::Completed {
                output,
                merged,
                letters_merged,
                pages,
                output_size,
                skipped,
                delete_failures,
                ..
            } => {
                self.success(&status);
                for path in letters_merged {
                    self.debug(&format!("Included letter {}", display_name(path)));
                }
                for path in merged {
                    self.debug(&format!("Merged {}", display_name(path)));
                }
                for file in skipped {
                    self.warning(&format!(
                        "Skipped {}: {}",
                        display_name(&file.path),
                        file.reason
                    ));
                }
                for failure in delete_failures {
                    self.warning(&format!(
                        "Could not delete {}: {}",
                        display_name(&failure.path),
                        failure.reason
                    ));
                }
                self.detail("Output", &output.display().to_string());
                self.detail("Pages", &pages.to_string());
                self.detail("Size", &format_file_size(*output_size));
                self.detail("Compression", report.compression.as_str());
            }
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// One-line summary of a run.
pub fn status_line(report: &RunReport) -> String {
    let mut line = match &report.outcome {
        RunOutcome::Aborted { reason } => {
            format!("{}: skipped ({reason})", report.folder_name)
        }
        RunOutcome::DryRun { plan } => format!(
            "{}: would consolidate {} document(s) into {}",
            report.folder_name,
            plan.input_count(),
            display_name(&plan.output)
        ),
        RunOutcome::Completed {
            output, removed, ..
        } => format!(
            "{}: consolidated {} document(s) into {}, removed {}",
            report.folder_name,
            report.outcome.consolidated(),
            display_name(output),
            removed
        ),
    };

    if report.letters_kept_separate() {
        line.push_str(", letter kept separate");
    }

    line
}
