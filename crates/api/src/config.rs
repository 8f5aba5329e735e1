//! Environment-driven server configuration.

use std::net::SocketAddr;

use thiserror::Error;

use katla_core::UserId;

pub const BIND_ADDR_VAR: &str = "KATLA_BIND_ADDR";
pub const DEFAULT_USER_VAR: &str = "KATLA_DEFAULT_USER_ID";
pub const SEED_DEMO_VAR: &str = "KATLA_SEED_DEMO";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Acting user when a request carries no `x-user-id` header.
    pub default_user: UserId,
    /// Populate the in-memory stores with demo records at startup.
    pub seed_demo: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            default_user: UserId::new(1),
            seed_demo: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .parse()
                .map_err(|e: std::net::AddrParseError| invalid(BIND_ADDR_VAR, &value, e))?;
        }

        if let Some(value) = lookup(DEFAULT_USER_VAR) {
            config.default_user = value
                .parse()
                .map_err(|e: katla_core::DomainError| invalid(DEFAULT_USER_VAR, &value, e))?;
        }

        if let Some(value) = lookup(SEED_DEMO_VAR) {
            config.seed_demo = value
                .parse()
                .map_err(|e: std::str::ParseBoolError| invalid(SEED_DEMO_VAR, &value, e))?;
        }

        Ok(config)
    }
}

fn invalid(var: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
