use crate::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DOWNLOAD_BUFFER_SIZE};
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub connect_timeout_secs: u64,
    pub download_buffer_size: Option<usize>, // Optional to allow default value
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            download_buffer_size: Some(DEFAULT_DOWNLOAD_BUFFER_SIZE),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file, falling back to defaults
    /// when no file exists at `path`. A file that exists but does not parse
    /// is an error rather than a silent fallback.
    pub fn load_or_default(path: &str) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(config_str) => {
                let config = toml::from_str(&config_str)
                    .with_context(|| format!("Failed to parse configuration file: {}", path))?;
                info!("Loaded configuration from {}", path);
                Ok(config)
            }
            Err(_) => {
                info!("No configuration file at {}, using defaults", path);
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.client.connect_timeout_secs,
            DEFAULT_CONNECT_TIMEOUT_SECS
        );
        assert_eq!(
            config.client.download_buffer_size,
            Some(DEFAULT_DOWNLOAD_BUFFER_SIZE)
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[client]\nconnect_timeout_secs = 5\n").unwrap();
        assert_eq!(config.client.connect_timeout_secs, 5);
        assert_eq!(
            config.client.download_buffer_size,
            Some(DEFAULT_DOWNLOAD_BUFFER_SIZE)
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/definitely/not/a/real/path.conf").unwrap();
        assert_eq!(
            config.client.connect_timeout_secs,
            DEFAULT_CONNECT_TIMEOUT_SECS
        );
    }
}
