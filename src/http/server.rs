//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all proxy handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Dispatch each request to exactly one terminal action
//! - Forward matched requests to the backend over plain HTTP
//!
//! # Design Decisions
//! - One shared hyper client; backend connections are pooled per its
//!   defaults and scoped to their requests
//! - Request and response bodies stream through, never buffered
//! - The backend response (status, headers, body) is relayed verbatim

use std::future::Future;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::uri::{Authority, Scheme},
    http::{Request, Uri},
    response::Response,
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::response;
use crate::lifecycle::shutdown::shutdown_signal;
use crate::routing::{dispatch, RouteDecision, ServicePrefix};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub prefix: ServicePrefix,
    pub backend: Authority,
    pub client: Client<HttpConnector, Body>,
}

/// HTTP server for the service proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from the loaded configuration and the
    /// resolved service prefix.
    pub fn new(config: ProxyConfig, prefix: ServicePrefix) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(config.timeouts.connect_secs)));

        let client = Client::builder(TokioExecutor::new()).build(connector);

        let state = AppState {
            prefix,
            backend: config.backend.address.clone(),
            client,
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until ctrl-c.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.serve(listener, shutdown_signal()).await
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run_with_shutdown(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        self.serve(listener, async move {
            let _ = shutdown.recv().await;
        })
        .await
    }

    async fn serve(
        self,
        listener: TcpListener,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main proxy handler.
///
/// Classifies the request path and performs exactly one terminal action:
/// answer the health probe, forward on the rewritten path, or 404.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path = request.uri().path().to_string();
    let method = request.method().clone();

    match dispatch(&path, &state.prefix) {
        RouteDecision::Health => {
            tracing::debug!(request_id = %request_id, path = %path, "Health check");
            response::health_response()
        }
        RouteDecision::Forward { path: forward_path } => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                forward_path = %forward_path,
                "Forwarding request"
            );
            forward(&state, request, &forward_path, &request_id).await
        }
        RouteDecision::NoMatch => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                "No matching service prefix"
            );
            response::not_found()
        }
    }
}

/// Hand the request off to the backend on the rewritten path.
async fn forward(
    state: &AppState,
    request: Request<Body>,
    forward_path: &str,
    request_id: &str,
) -> Response {
    let (mut parts, body) = request.into_parts();

    parts.uri = match upstream_uri(&parts.uri, &state.backend, forward_path) {
        Ok(uri) => uri,
        Err(error) => {
            tracing::error!(request_id = %request_id, error = %error, "Invalid upstream URI");
            return response::bad_gateway();
        }
    };

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body))
        }
        Err(error) => {
            tracing::error!(request_id = %request_id, error = %error, "Backend unreachable");
            response::bad_gateway()
        }
    }
}

/// Rebuild the request URI for the backend leg: plain HTTP, the backend
/// authority, the rewritten path, and the original query string.
fn upstream_uri(
    original: &Uri,
    backend: &Authority,
    forward_path: &str,
) -> Result<Uri, axum::http::Error> {
    let path_and_query = match original.query() {
        Some(query) => format!("{forward_path}?{query}"),
        None => forward_path.to_string(),
    };

    Uri::builder()
        .scheme(Scheme::HTTP)
        .authority(backend.clone())
        .path_and_query(path_and_query)
        .build()
}
