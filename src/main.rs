//! Order Service
//!
//! A deliberately flaky orders API used to exercise client-side circuit
//! breakers.
//!
//! # Behavior
//!
//! ```text
//!     GET /orders ──▶ minute even? ──yes──▶ 500 {"error": "..."}
//!                          │
//!                          no
//!                          ▼
//!                    200 {"orders": [ORD-001, ORD-002, ORD-003]}
//! ```
//!
//! Listens on 0.0.0.0:8080. An optional `order-service.toml` in the working
//! directory can change the bind address and logging.

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use order_service::config::load_or_default;
use order_service::error::ServiceError;
use order_service::lifecycle::{shutdown_signal, Shutdown};
use order_service::observability::init_logging;
use order_service::{HttpServer, SystemClock};

const CONFIG_FILE: &str = "order-service.toml";

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    let config = load_or_default(Path::new(CONFIG_FILE))?;

    init_logging(&config.observability);

    tracing::info!("order-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        json_logs = config.observability.json_logs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| ServiceError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(ServiceError::Serve)?;

    tracing::info!(address = %local_addr, "Order service listening");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.trigger();
    });

    let server = HttpServer::new(config, Arc::new(SystemClock));
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
