use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Address configuration for a peer
///
/// Three lists of multiaddr strings: addresses to bind transports to,
/// extra addresses to announce on top of the bound ones, and addresses
/// that must never be announced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressConfig {
    /// Multiaddrs to listen on
    #[serde(default)]
    pub listen: Vec<String>,

    /// Multiaddrs to announce in addition to the listen addresses
    #[serde(default)]
    pub announce: Vec<String>,

    /// Multiaddrs to withhold from announcement
    #[serde(default)]
    pub no_announce: Vec<String>,
}

impl AddressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listen(mut self, addresses: Vec<String>) -> Self {
        self.listen = addresses;
        self
    }

    pub fn with_announce(mut self, addresses: Vec<String>) -> Self {
        self.announce = addresses;
        self
    }

    pub fn with_no_announce(mut self, addresses: Vec<String>) -> Self {
        self.no_announce = addresses;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Failed to serialize config: {0}")]
    SerializeError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),
}
