#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so dependent crates can log through `slidesheet_core::debug!` and
//! friends without naming `tracing` themselves. Without the feature nothing is
//! exported and call sites are compiled out behind `#[cfg(feature = "tracing")]`.
//!
//! The `tracing-json` feature adds [`init_json_subscriber`], a one-call setup
//! for newline-delimited JSON logs filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Environment variable consulted by [`init_json_subscriber`].
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Default filter used when [`LOG_FILTER_ENV`] is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str =
    "slidesheet=debug,slidesheet_core=debug,slidesheet_widgets=debug";

/// Install a global JSON subscriber.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .try_init()
        .is_ok()
}
