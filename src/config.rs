use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
const CARD_DATA_FILE: &str = "card_data.json";
const INDEX_FILE: &str = "index.html";
const DOCS_FILE: &str = "openapi.json";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),
}

/// Process configuration, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Served under `/static`; also holds the landing page and API docs
    pub static_dir: PathBuf,
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let static_dir = PathBuf::from(DEFAULT_STATIC_DIR);
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: static_dir.join(CARD_DATA_FILE),
            static_dir,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `CARD_DATA_PATH`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let data_path = lookup("CARD_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| static_dir.join(CARD_DATA_FILE));

        Ok(Self {
            host,
            port,
            static_dir,
            data_path,
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(INDEX_FILE)
    }

    pub fn docs_path(&self) -> PathBuf {
        self.static_dir.join(DOCS_FILE)
    }
}
