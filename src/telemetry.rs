//! Telemetry helpers for applications embedding `line-chart-rs`.
//!
//! The widget only emits `tracing` events (rebuilds and taps at `trace`,
//! dataset assignment at `debug`, swallowed surface failures at `warn`).
//! Hosts either call one of the helpers below or install their own
//! subscriber and filters.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Equivalent to `init_tracing_with_fallback_filter(DEFAULT_FILTER)`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_FILTER)
}

/// Initializes a compact fmt subscriber honoring `RUST_LOG`, falling back to
/// `fallback` (for example `"line_chart_rs=trace"`) when the variable is unset
/// or unparsable.
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// application already installed a global subscriber.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
