//! Suga service proxy library.
//!
//! A path-prefix demultiplexing reverse proxy: one service behind a shared
//! multi-tenant ingress, addressed by its `/{stack}-{service}` prefix.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::ServicePrefix;
