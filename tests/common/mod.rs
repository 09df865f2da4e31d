//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use order_service::http::{build_router, AppState};
use order_service::{FixedClock, HttpServer, ServiceConfig, ServiceError, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const FAILURE_BODY: &str =
    r#"{"error":"Service temporarily unavailable (testing circuit breaker)"}"#;

pub const ORDERS_BODY: &str = concat!(
    r#"{"orders":["#,
    r#"{"id":"ORD-001","amount":120.5,"status":"CREATED"},"#,
    r#"{"id":"ORD-002","amount":89.99,"status":"PAID"},"#,
    r#"{"id":"ORD-003","amount":45.0,"status":"SHIPPED"}"#,
    r#"]}"#
);

/// Router whose clock is pinned to `minute`.
pub fn router_at(minute: u32) -> Router {
    build_router(AppState {
        clock: Arc::new(FixedClock(minute)),
    })
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A server running on an ephemeral port with a pinned clock.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), ServiceError>>,
}

/// Start a real server, binding the address from its own config.
pub async fn start_server(minute: u32) -> TestServer {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let server = HttpServer::new(config, Arc::new(FixedClock(minute)));
    let listener = TcpListener::bind(&server.config().listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(server.run(listener, server_shutdown));

    tokio::time::sleep(Duration::from_millis(50)).await;
    TestServer {
        addr,
        shutdown,
        handle,
    }
}
