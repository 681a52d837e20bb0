//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site-root` for static assets.
    pub site_root: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, site_root: None }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SITE_ROOT`: directory holding `pkg/` and public assets; the Leptos
    ///   `site-root` when absent
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|e| invalid("PORT", raw, &e))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match non_empty(lookup("BIND_ADDR")) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|e| invalid("BIND_ADDR", raw, &e))?,
            None => DEFAULT_BIND_ADDR,
        };
        let site_root = non_empty(lookup("SITE_ROOT")).map(PathBuf::from);

        Ok(Self { bind_addr, port, site_root })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn invalid(var: &'static str, value: String, reason: &impl std::fmt::Display) -> ConfigError {
    ConfigError::Invalid { var, value, reason: reason.to_string() }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
