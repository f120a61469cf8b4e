//! Structured logging for simulation debugging
//!
//! The engine emits `tracing` events as it works: `info!` for run
//! lifecycle, `debug!` for scheduling decisions, `trace!` per processed
//! event. These helpers install a subscriber for binaries and tests that
//! want that output on the terminal; library users can install their own
//! subscriber instead and skip this module entirely.
//!
//! `RUST_LOG` overrides the defaults as usual, e.g.
//! `RUST_LOG=tqsim_core::engine=trace`.

use tracing::{info, Span};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a terminal subscriber at `info` level.
pub fn init_logging() {
    init_logging_with_level("info");
}

/// Install a terminal subscriber at the given level
/// (`"trace"`, `"debug"`, `"info"`, `"warn"`, or `"error"`).
///
/// Does nothing if a global subscriber is already installed, so tests can
/// call it freely.
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("tqsim_core={level},tqsim_metrics={level}").into());

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!(level, "simulation logging initialized");
    }
}

/// Span covering one whole simulation run.
pub fn run_span(name: &str) -> Span {
    tracing::info_span!("simulation_run", name = name)
}
