use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_STATIC_DIR: &str = "frontend/dist";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CLERK_JWT_KEY must be set when CLERK_PUBLISHABLE_KEY is set")]
    MissingJwtKey,
    #[error("BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
}

/// Identity provider settings. Present only when a publishable key is configured.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub publishable_key: String,
    /// PEM encoded public key used to verify session tokens.
    pub jwt_key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub identity: Option<IdentityConfig>,
    pub static_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let identity = match non_blank("CLERK_PUBLISHABLE_KEY") {
            Some(publishable_key) => Some(IdentityConfig {
                publishable_key,
                jwt_key: non_blank("CLERK_JWT_KEY").ok_or(ConfigError::MissingJwtKey)?,
            }),
            None => None,
        };

        let static_dir = non_blank("STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        let bind_addr = non_blank("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        Ok(Self {
            identity,
            static_dir,
            bind_addr,
        })
    }
}
