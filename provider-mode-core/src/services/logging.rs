//! Logging service

use crate::models::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter directive for `level`, scoped to the provider-mode crates
pub fn filter_directive(level: LogLevel) -> String {
    format!(
        "provider_mode={level},provider_mode_core={level}",
        level = level.as_str()
    )
}

/// Initialize logging with the specified level.
///
/// `RUST_LOG`, when set, replaces the level-derived filter. Output goes to
/// stderr so stdout stays machine-readable.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(filter_directive(level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;

    Ok(())
}
