use std::net::SocketAddr;

use thiserror::Error;

use crate::modules::users::core::profile::{ProfileName, RegistryProfile, UnknownProfile};

pub const ADDR_VAR: &str = "USERS_API_ADDR";
pub const PROFILE_VAR: &str = "USERS_API_PROFILE";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("USERS_API_ADDR is not a socket address: {value}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("USERS_API_PROFILE: {0}")]
    Profile(#[from] UnknownProfile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub profile: RegistryProfile,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let profile: RegistryProfile = match lookup(PROFILE_VAR) {
            Some(raw) => raw.parse::<ProfileName>()?.into(),
            None => RegistryProfile::directory(),
        };

        Ok(Self { bind_addr, profile })
    }
}
