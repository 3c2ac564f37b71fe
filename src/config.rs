//! Configuration Module
//!
//! This module defines all configuration structures for the node's pool
//! intake. Configuration is loaded from TOML files and parsed using serde.

use crate::fork::ForkSchedule;
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [chain]
/// tag = 0x27
///
/// [forks]
/// vip191 = 0
/// galactica = 10
///
/// [api]
/// host = "127.0.0.1"
/// port = 8669
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub chain: ChainConfig,
    /// Forks left out are never active
    #[serde(default)]
    pub forks: ForkSchedule,
    pub api: ApiConfig,
}

/// Identity of the chain this node serves
///
/// # Fields
/// - `tag`: network tag every admitted transaction must carry
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub tag: u8,
}

/// API server configuration
///
/// # Fields
/// - `host`: IP address to bind to (e.g., "127.0.0.1" or "0.0.0.0")
/// - `port`: TCP port to listen on
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
