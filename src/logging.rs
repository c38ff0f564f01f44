//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MSP_THEME_LOG";

/// Initialize the logging subsystem
///
/// Logs go to stderr so exported text on stdout stays clean.
/// The filter is read from `MSP_THEME_LOG`; without it only warnings are shown,
/// or debug output for this crate when `verbose` is set.
///
/// # Examples
/// ```bash
/// MSP_THEME_LOG=debug msp-theme export
/// ```
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "msp_theme=debug,warn"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .init();
}
