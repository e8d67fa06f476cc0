//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (SUGA_* variables)
//!     → loader.rs (read & validate)
//!     → ProxyConfig (validated, immutable)
//!     → passed into HttpServer before the listener starts
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Required values missing from the environment are fatal at startup
//! - Optional values fall back to conventional defaults (port 9001)

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::BackendConfig;
pub use schema::ListenerConfig;
pub use schema::ProxyConfig;
pub use schema::TimeoutConfig;
