//! Configuration schema definitions.
//!
//! The complete configuration structure for the proxy. Everything here is
//! read once from the environment by `loader` and never mutated afterwards.

use axum::http::uri::Authority;

/// Root configuration for the service proxy.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Stack identifier this service is deployed under.
    pub stack_id: String,

    /// Name of the service within the stack.
    pub service_name: String,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The single backend this proxy forwards to.
    pub backend: BackendConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            // Port 9001 is the conventional container port for service proxies.
            bind_address: "0.0.0.0:9001".to_string(),
        }
    }
}

/// Backend server configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend authority (e.g., "127.0.0.1:3000"), parsed at load time.
    pub address: Authority,
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}
