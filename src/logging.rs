//! Logging initialization.
//!
//! Diagnostics and progress go to stderr through `tracing`, so stdout only
//! ever carries the report.

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber.
///
/// `directives` is an `EnvFilter` string such as `"warn"` or
/// `"log_event_analyzer=debug"`. Must be called at most once per process.
pub fn init_tracing(directives: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(directives)
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", directives, e))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {}", e))?;

    Ok(())
}
