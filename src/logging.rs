//! Diagnostic logging to stderr via `tracing`.

use tracing_subscriber::EnvFilter;

use crate::config::ENV_LOG;

/// Filter used when `NOTECMD_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "notecmd=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // try_init fails only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
