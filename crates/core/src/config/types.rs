use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Where the four catalog collections come from
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSourceKind {
    /// JSON files on local disk, loaded once at startup.
    #[default]
    Bundled,
    /// JSON documents fetched from a static HTTP host on every request.
    Remote,
}

/// Dataset configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatasetConfig {
    #[serde(default)]
    pub source: DatasetSourceKind,
    #[serde(default)]
    pub bundled: BundledConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Bundled dataset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BundledConfig {
    /// Directory holding channels.json, streams.json, logos.json, countries.json
    #[serde(default = "default_bundle_dir")]
    pub dir: PathBuf,
}

impl Default for BundledConfig {
    fn default() -> Self {
        Self {
            dir: default_bundle_dir(),
        }
    }
}

fn default_bundle_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Remote dataset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL of the static API (e.g., "https://iptv-org.github.io/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 20)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Fetch the four documents concurrently (default: true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            parallel: default_parallel(),
        }
    }
}

fn default_base_url() -> String {
    "https://iptv-org.github.io/api".to_string()
}

fn default_timeout() -> u32 {
    20
}

fn default_parallel() -> bool {
    true
}

/// Config as exposed over the API
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub dataset: SanitizedDatasetConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedDatasetConfig {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundled_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        let dataset = match config.dataset.source {
            DatasetSourceKind::Bundled => SanitizedDatasetConfig {
                source: "bundled".to_string(),
                bundled_dir: Some(config.dataset.bundled.dir.display().to_string()),
                remote: None,
            },
            DatasetSourceKind::Remote => SanitizedDatasetConfig {
                source: "remote".to_string(),
                bundled_dir: None,
                remote: Some(config.dataset.remote.clone()),
            },
        };

        Self {
            server: config.server.clone(),
            dataset,
        }
    }
}
