use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable prefix for config overrides
pub const ENV_PREFIX: &str = "IPTV_CATALOG_";

/// Load configuration from file with environment variable overrides.
///
/// Nested keys are separated by a double underscore, e.g.
/// `IPTV_CATALOG_DATASET__SOURCE=remote`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetSourceKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[server]
port = 9000

[dataset]
source = "remote"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dataset.source, DatasetSourceKind::Remote);
    }

    #[test]
    fn test_load_config_from_str_unknown_source() {
        let toml = r#"
[dataset]
source = "ftp"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 3000

[dataset.bundled]
dir = "/srv/iptv"
"#
        )
        .unwrap();

        // Jail serializes access to the process environment
        figment::Jail::expect_with(|_jail| {
            let config = load_config(temp_file.path()).unwrap();
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.server.host.to_string(), "127.0.0.1");
            assert_eq!(config.dataset.bundled.dir.to_str().unwrap(), "/srv/iptv");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[server]\nport = 3000\n").unwrap();

        figment::Jail::expect_with(|jail| {
            jail.set_env("IPTV_CATALOG_SERVER__PORT", "4000");
            jail.set_env("IPTV_CATALOG_DATASET__REMOTE__TIMEOUT_SECS", "5");
            let config = load_config(temp_file.path()).unwrap();
            assert_eq!(config.server.port, 4000);
            assert_eq!(config.dataset.remote.timeout_secs, 5);
            Ok(())
        });
    }
}
