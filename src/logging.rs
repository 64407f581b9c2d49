use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Builds the subscriber filter from a level (`info`) or a full directive
/// list (`iris_serve=debug,tower_http=info`).
pub fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        Error::config(format!("invalid log filter '{}': {}", directives, e))
    })
}

/// Installs the JSON subscriber for the process.
pub fn init(directives: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives)?)
        .json()
        .init();
    Ok(())
}
