//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the orders handler
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener
//! - Stop on the shutdown broadcast, draining in-flight requests

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::clock::Clock;
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::http::request::{request_id_of, UuidRequestId};
use crate::orders::handlers::{list_orders, not_found};

/// Application state injected into handlers.
///
/// Read-only; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

/// HTTP server for the order service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server reading time from `clock`.
    pub fn new(config: ServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let router = build_router(AppState { clock });
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServiceError> {
        let addr = listener.local_addr().map_err(ServiceError::Serve)?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await
            .map_err(ServiceError::Serve)?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// `/orders` accepts any method. Every other path gets a JSON 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/orders", any(list_orders))
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(
                    |request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            path = %request.uri().path(),
                            request_id = %request_id_of(request),
                        )
                    },
                ))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
