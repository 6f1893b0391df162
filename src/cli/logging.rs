//! Logging setup for the CLI using `tracing-subscriber`
//!
//! The library itself only emits `tracing` events; the binary decides where
//! they go. Logs are written to stderr so stdout stays parseable.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level for a `-v` count: none is warn, then info, debug, trace
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `RUST_LOG` takes precedence over the verbosity flag when set
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,tabular_model_sdk={}",
            level.to_string().to_lowercase()
        ))
    })
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(verbosity: u8) {
    let filter = build_env_filter(level_from_verbosity(verbosity));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry().with(filter).with(layer).init();
}
