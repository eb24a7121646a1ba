//! System configuration.
//!
//! Loaded from YAML, then overridden by `STOREFRONT_*` environment variables. Every
//! section is optional and falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub stores: StoresConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Deadline given to every resolver, in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 3000,
        }
    }
}

impl GatewayConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Server-side page size used for `take == 0` and as the upper clamp.
    pub cap: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            cap: crate::paging::DEFAULT_PAGE_CAP,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoresConfig {
    /// Capacity of each store actor's request channel.
    pub channel_buffer: usize,
}

impl Default for StoresConfig {
    fn default() -> Self {
        Self { channel_buffer: 32 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl SystemConfig {
    /// Reads `path`, then applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&content)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parses YAML without looking at the environment.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Defaults plus environment overrides, for running without a config file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(ms) = parse_var(&lookup, "STOREFRONT_REQUEST_TIMEOUT_MS")? {
            self.gateway.request_timeout_ms = ms;
        }
        if let Some(cap) = parse_var(&lookup, "STOREFRONT_PAGE_CAP")? {
            self.paging.cap = cap;
        }
        if let Some(buffer) = parse_var(&lookup, "STOREFRONT_CHANNEL_BUFFER")? {
            self.stores.channel_buffer = buffer;
        }
        if let Some(level) = lookup("STOREFRONT_LOG_LEVEL") {
            self.log.level = level;
        }
        Ok(())
    }
}

fn parse_var<V: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<V>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = SystemConfig::from_yaml_str("").unwrap();
        assert_eq!(config.gateway.request_timeout_ms, 3000);
        assert_eq!(config.paging.cap, 100);
        assert_eq!(config.stores.channel_buffer, 32);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "gateway:\n  request_timeout_ms: 250\nlog:\n  json: true\n";
        let config = SystemConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.gateway.request_timeout(), Duration::from_millis(250));
        assert!(config.log.json);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.paging.cap, 100);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = SystemConfig::from_yaml_str("gateway: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let vars: HashMap<&str, &str> = [
            ("STOREFRONT_REQUEST_TIMEOUT_MS", "50"),
            ("STOREFRONT_PAGE_CAP", "10"),
            ("STOREFRONT_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();
        let mut config = SystemConfig::from_yaml_str("paging:\n  cap: 500\n").unwrap();
        config
            .apply_overrides(|var| vars.get(var).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.gateway.request_timeout_ms, 50);
        assert_eq!(config.paging.cap, 10);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.stores.channel_buffer, 32);
    }

    #[test]
    fn unparsable_override_is_rejected() {
        let mut config = SystemConfig::default();
        let err = config
            .apply_overrides(|var| (var == "STOREFRONT_PAGE_CAP").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "STOREFRONT_PAGE_CAP", .. }));
    }
}
