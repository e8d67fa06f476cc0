//! Suga service proxy.
//!
//! Fronts a single backend service inside a multi-tenant deployment where
//! many services share one ingress layer. Requests are demultiplexed by a
//! path prefix unique to the stack/service pair:
//!
//! ```text
//!     Client Request                  ┌──────────────────────────────────┐
//!     ──────────────────────────────▶ │            SUGA PROXY            │
//!     GET /{stack}-{service}/users/1  │                                  │
//!                                     │  ┌─────────┐     ┌────────────┐  │
//!                                     │  │  http   │────▶│  routing   │  │
//!                                     │  │ server  │     │  dispatch  │  │
//!                                     │  └─────────┘     └─────┬──────┘  │
//!                                     │                        │         │
//!                                     │     health ◀───────────┼──▶ 404  │
//!                                     │                        │         │
//!     Client Response                 │                  ┌─────▼──────┐  │      Backend
//!     ◀───────────────────────────────┼──────────────────│  forward   │──┼────▶ Service
//!                                     │                  │ GET /users/1  │
//!                                     │                  └────────────┘  │
//!                                     └──────────────────────────────────┘
//! ```
//!
//! Configuration comes from the environment (`SUGA_STACK_ID`,
//! `SUGA_SERVICE_NAME`, `SUGA_BACKEND_HOST`); missing values are fatal and
//! the proxy never starts listening.

use tokio::net::TcpListener;

use suga_proxy::config::loader;
use suga_proxy::http::HttpServer;
use suga_proxy::observability::logging;
use suga_proxy::routing::ServicePrefix;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("suga-proxy v0.1.0 starting");

    // Load configuration from the environment; any error here is fatal.
    let config = loader::from_env()?;
    let prefix = ServicePrefix::resolve(&config.stack_id, &config.service_name)?;

    tracing::info!(
        service_prefix = %prefix,
        backend = %config.backend.address,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config, prefix);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
