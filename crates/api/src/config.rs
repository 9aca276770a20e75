//! Process configuration, read from environment variables.

use std::net::SocketAddr;

use potluck_observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "POTLUCK_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "POTLUCK_LOG_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address such as 0.0.0.0:8080, got {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Set when `POTLUCK_LOG_FORMAT` held an unknown value and the default was used.
    pub ignored_log_format: Option<UnknownLogFormat>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source (the process env in `main`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let (log_format, ignored_log_format) = match lookup(LOG_FORMAT_VAR) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(e) => (LogFormat::default(), Some(e)),
            },
        };

        Ok(Self {
            bind_addr,
            log_format,
            ignored_log_format,
        })
    }
}
