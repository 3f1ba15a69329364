//! Configuration: TOML or JSON file, located by flag, env var or default path.

use std::fs;
use std::path::{Path, PathBuf};

use ovh_gateway_core::CoreError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "OVH_GATEWAY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub checker: CheckerConfig,
}

/// Static discovery: service names, in the order they are listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiscoveryConfig {
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Print the service list at startup.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// File the config came from; `None` when defaults were used.
    pub path: Option<PathBuf>,
    pub config: GatewayConfig,
}

/// Parse a config file. `.json` is JSON, anything else TOML.
pub fn load_from_path(path: &Path) -> Result<GatewayConfig, CoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CoreError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        _ => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> CoreError {
    CoreError::Config(format!("failed to parse {}: {}", path.display(), err))
}

/// Load config: explicit path, else `OVH_GATEWAY_CONFIG`, else `config/gateway.toml` if present, else defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, CoreError> {
    load_with_env(explicit, std::env::var(CONFIG_ENV).ok())
}

/// `load` with the env var value passed in. An empty env var counts as unset.
pub fn load_with_env(explicit: Option<&Path>, env_path: Option<String>) -> Result<LoadedConfig, CoreError> {
    load_with_fallback(explicit, env_path, Path::new(DEFAULT_CONFIG_PATH))
}

/// `load_with_env` with the fallback file passed in; it is only read if it exists.
pub fn load_with_fallback(
    explicit: Option<&Path>,
    env_path: Option<String>,
    fallback: &Path,
) -> Result<LoadedConfig, CoreError> {
    let path = match (explicit, env_path) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, Some(env)) if !env.is_empty() => Some(PathBuf::from(env)),
        _ => fallback.exists().then(|| fallback.to_path_buf()),
    };
    match path {
        Some(path) => {
            let config = load_from_path(&path)?;
            info!(path = %path.display(), "configuration loaded");
            Ok(LoadedConfig {
                path: Some(path),
                config,
            })
        }
        None => {
            warn!("no configuration found, using defaults");
            Ok(LoadedConfig {
                path: None,
                config: GatewayConfig::default(),
            })
        }
    }
}
