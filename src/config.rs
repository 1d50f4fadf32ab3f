//! Configuration types.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;

use crate::error::ConfigError;

/// Environment variable holding the shared API secret.
pub const API_KEY_VAR: &str = "HONEYPOT_API_KEY";
/// Environment variable overriding the bind host.
pub const HOST_VAR: &str = "HONEYPOT_HOST";
/// Environment variable overriding the bind port.
pub const PORT_VAR: &str = "HONEYPOT_PORT";

const DEFAULT_PORT: u16 = 8000;

/// Service configuration, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct HoneypotConfig {
    /// Shared secret callers must present in `api_key`.
    pub api_key: SecretString,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl HoneypotConfig {
    /// Build a config with the given secret and the default bind address.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// A missing or blank secret is an error: the service must never run
    /// without authorization.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_VAR.to_string()))?;

        let host: IpAddr = match lookup(HOST_VAR) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: HOST_VAR.to_string(),
                message: format!("{raw:?}: {e}"),
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port: u16 = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: PORT_VAR.to_string(),
                message: format!("{raw:?}: {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            bind_addr: SocketAddr::new(host, port),
        })
    }
}
