//! Configuration loading from the environment.
//!
//! # Responsibilities
//! - Read the `SUGA_*` environment variables
//! - Validate required values (present, non-empty, parseable)
//! - Produce an immutable `ProxyConfig` or a fatal `ConfigError`
//!
//! # Design Decisions
//! - Unset and empty variables are treated identically (both fatal)
//! - The backend address is parsed as a URI authority here so the
//!   request hot path never has to re-validate it

use std::env;

use axum::http::uri::Authority;
use thiserror::Error;

use crate::config::schema::{BackendConfig, ListenerConfig, ProxyConfig, TimeoutConfig};

/// Environment variable naming the stack this service belongs to.
pub const ENV_STACK_ID: &str = "SUGA_STACK_ID";

/// Environment variable naming the service within the stack.
pub const ENV_SERVICE_NAME: &str = "SUGA_SERVICE_NAME";

/// Environment variable holding the backend `host:port`.
pub const ENV_BACKEND_HOST: &str = "SUGA_BACKEND_HOST";

/// Optional override for the listener bind address.
pub const ENV_BIND_ADDRESS: &str = "SUGA_BIND_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is set but its value cannot be used.
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Load and validate configuration from the process environment.
pub fn from_env() -> Result<ProxyConfig, ConfigError> {
    from_lookup(|name| env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Split out from [`from_env`] so tests can supply variables without
/// touching the process environment.
fn from_lookup<F>(lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let stack_id = required(&lookup, ENV_STACK_ID)?;
    let service_name = required(&lookup, ENV_SERVICE_NAME)?;

    let backend_host = required(&lookup, ENV_BACKEND_HOST)?;
    let address: Authority =
        backend_host
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: ENV_BACKEND_HOST,
                value: backend_host.clone(),
            })?;

    let mut listener = ListenerConfig::default();
    if let Some(bind) = lookup(ENV_BIND_ADDRESS).filter(|v| !v.is_empty()) {
        listener.bind_address = bind;
    }

    Ok(ProxyConfig {
        stack_id,
        service_name,
        listener,
        backend: BackendConfig { address },
        timeouts: TimeoutConfig::default(),
    })
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    fn load(pairs: &[(&'static str, &str)]) -> Result<ProxyConfig, ConfigError> {
        let map = vars(pairs);
        from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn loads_complete_config() {
        let config = load(&[
            (ENV_STACK_ID, "abc123"),
            (ENV_SERVICE_NAME, "api"),
            (ENV_BACKEND_HOST, "127.0.0.1:3000"),
        ])
        .unwrap();

        assert_eq!(config.stack_id, "abc123");
        assert_eq!(config.service_name, "api");
        assert_eq!(config.backend.address.as_str(), "127.0.0.1:3000");
        assert_eq!(config.listener.bind_address, "0.0.0.0:9001");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn missing_stack_id_is_fatal() {
        let err = load(&[
            (ENV_SERVICE_NAME, "api"),
            (ENV_BACKEND_HOST, "127.0.0.1:3000"),
        ])
        .unwrap_err();

        assert_eq!(err.to_string(), "SUGA_STACK_ID is not set");
    }

    #[test]
    fn empty_service_name_is_fatal() {
        let err = load(&[
            (ENV_STACK_ID, "abc123"),
            (ENV_SERVICE_NAME, ""),
            (ENV_BACKEND_HOST, "127.0.0.1:3000"),
        ])
        .unwrap_err();

        assert_eq!(err.to_string(), "SUGA_SERVICE_NAME is not set");
    }

    #[test]
    fn malformed_backend_host_is_fatal() {
        let err = load(&[
            (ENV_STACK_ID, "abc123"),
            (ENV_SERVICE_NAME, "api"),
            (ENV_BACKEND_HOST, "not a host"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: ENV_BACKEND_HOST,
                ..
            }
        ));
    }

    #[test]
    fn bind_address_override() {
        let config = load(&[
            (ENV_STACK_ID, "abc123"),
            (ENV_SERVICE_NAME, "api"),
            (ENV_BACKEND_HOST, "127.0.0.1:3000"),
            (ENV_BIND_ADDRESS, "127.0.0.1:8080"),
        ])
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }
}
