mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Where configuration comes from: an explicit file, a fallback file that may
/// be absent, and an optional model path override.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub explicit_path: Option<String>,
    pub default_path: String,
    pub model_path: Option<String>,
}

impl ConfigSource {
    /// Reads `CONFIG_PATH` and `MODEL_PATH` from the environment.
    pub fn from_env() -> Self {
        Self {
            explicit_path: env::var("CONFIG_PATH").ok(),
            default_path: DEFAULT_CONFIG_PATH.to_string(),
            model_path: env::var("MODEL_PATH").ok(),
        }
    }
}

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`).
///
/// A missing default file yields the built-in defaults; a missing file named
/// explicitly through `CONFIG_PATH` is an error. `MODEL_PATH` overrides the
/// configured model location.
pub async fn load() -> Result<Config> {
    load_from_source(ConfigSource::from_env()).await
}

pub async fn load_from_source(source: ConfigSource) -> Result<Config> {
    let mut config = if let Some(path) = source.explicit_path {
        load_from_path(&path).await?
    } else if tokio::fs::try_exists(&source.default_path).await? {
        load_from_path(&source.default_path).await?
    } else {
        debug!(
            "No {} found, using default configuration",
            source.default_path
        );
        Config::default()
    };

    if let Some(model_path) = source.model_path {
        config.model.path = model_path;
    }

    Ok(config)
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
