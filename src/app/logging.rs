//! Diagnostic tracing.
//!
//! User-facing status lines are printed by the CLI layer; tracing output is for
//! debugging tool invocations and deploy decisions.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact form.
///
/// ```bash
/// RUST_LOG=kn_workflow=debug kn-workflow deploy
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
