//! Diagnostic tracing.
//!
//! Diagnostics go to stderr through `tracing`; the user-facing status line
//! and JSON report go to stdout through [`crate::output`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,foldermerge=debug" } else { "warn" }
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn`, or `foldermerge=debug` with
/// `verbose`. Output: stderr, compact format.
///
/// ```bash
/// RUST_LOG=foldermerge=info foldermerge ClientX
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
