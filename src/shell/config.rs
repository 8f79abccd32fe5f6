use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "USERS_API_HOST";
pub const PORT_VAR: &str = "USERS_API_PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid USERS_API_PORT `{value}`: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid USERS_API_HOST `{value}`: {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
