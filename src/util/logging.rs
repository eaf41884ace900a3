//! Tracing setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directive, e.g. `debug` or
/// `nursery_pricing=trace`.
pub const LOG_ENV: &str = "NURSERY_PRICING_LOG";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    // A second init (tests, hot reload) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
