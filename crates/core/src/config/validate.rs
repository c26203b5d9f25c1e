use super::{types::Config, ConfigError, DatasetSourceKind};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Remote dataset has a base URL and a non-zero timeout (when selected)
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.dataset.source == DatasetSourceKind::Remote {
        let remote = &config.dataset.remote;
        if remote.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.remote.base_url cannot be empty".to_string(),
            ));
        }
        if remote.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "dataset.remote.timeout_secs cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}
