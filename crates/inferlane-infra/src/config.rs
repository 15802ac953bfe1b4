//! Adapter configuration loader.
//!
//! Reads the pipeline's YAML config (`configs/dev.yaml` by default) and turns
//! it into a validated [`AdapterConfig`]. A missing file yields defaults (local
//! backend); an unreadable, malformed or invalid file is an error, so a typo
//! never silently downgrades a deployment to the mock backend.

use std::path::Path;

use inferlane_types::config::{AdapterConfig, DEFAULT_REGION, RawConfig};
use inferlane_types::error::ConfigError;

/// Config path used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "configs/dev.yaml";

/// Load configuration from `path`, taking the fallback region from `AWS_REGION`.
pub async fn load_config(path: &Path) -> Result<AdapterConfig, ConfigError> {
    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
    load_config_with_region(path, &region).await
}

/// Load configuration from `path` with an explicit fallback region.
///
/// - Missing file: defaults.
/// - Empty file: defaults.
/// - Otherwise: parsed and validated.
pub async fn load_config_with_region(
    path: &Path,
    fallback_region: &str,
) -> Result<AdapterConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return AdapterConfig::from_raw(RawConfig::default(), fallback_region);
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let raw = if content.trim().is_empty() {
        RawConfig::default()
    } else {
        serde_yaml_ng::from_str::<RawConfig>(&content).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?
    };

    let config = AdapterConfig::from_raw(raw, fallback_region)?;
    tracing::info!(
        path = %path.display(),
        provider = %config.provider,
        model_id = %config.model_id,
        "Loaded inference config"
    );
    Ok(config)
}
