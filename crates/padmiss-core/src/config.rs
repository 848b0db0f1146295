//! Cabinet-side configuration consumed by the client.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the remote tournament service.
    pub padmiss_api_url: String,
    /// Pre-shared key identifying this cabinet to the service.
    pub api_key: Option<String>,
    /// Local webserver announced by the broadcast call.
    pub webserver: Option<WebserverConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebserverConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl WebserverConfig {
    /// The host:port pair announced to the remote service.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
