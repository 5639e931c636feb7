use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3000));
pub const DEFAULT_DB_PATH: &str = "db.json";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Backing file of the JSON store
    pub db_path: PathBuf,
    /// Directory served for every GET that is not an API route
    pub static_dir: PathBuf,
    /// Exact CORS origin. `None` allows any origin.
    pub cors_origin: Option<String>,
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            static_dir: PathBuf::from("."),
            cors_origin: None,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// Call `dotenv::dotenv()` beforehand if a `.env` file should be honored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = match lookup("BIND_ADDRESS") {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .with_context(|| format!("BIND_ADDRESS is not a socket address: {}", raw))?,
            None => DEFAULT_BIND_ADDRESS,
        };

        let db_path = lookup("DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let cors_origin = lookup("CORS_ORIGIN").filter(|s| !s.trim().is_empty());
        if let Some(origin) = &cors_origin {
            HeaderValue::from_str(origin)
                .with_context(|| format!("CORS_ORIGIN is not a valid header value: {}", origin))?;
        }

        let body_limit = match lookup("BODY_LIMIT_BYTES") {
            Some(raw) => raw.parse::<usize>().with_context(|| {
                format!("BODY_LIMIT_BYTES must be a positive integer, got {}", raw)
            })?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            bind_address,
            db_path,
            static_dir,
            cors_origin,
            body_limit,
        })
    }
}
