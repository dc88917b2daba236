//! User-facing output.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter, status_line};
