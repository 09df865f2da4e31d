//! Shutdown coordination for the service.
//!
//! `main` subscribes the HTTP server before serving and fires [`Shutdown::trigger`]
//! from the signal watcher. [`HttpServer::run`](crate::http::HttpServer::run)
//! hands its receiver to axum's graceful shutdown, so a trigger stops new
//! connections and lets in-flight `/orders` requests finish.

use tokio::sync::broadcast;

/// Broadcast handle that stops every subscribed server.
///
/// A trigger sent before the server polls its receiver is kept in the
/// channel, so a signal arriving during startup still stops the server.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to pass to [`HttpServer::run`](crate::http::HttpServer::run).
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to drain and stop.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Servers still running (their receivers are dropped once `run` returns).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
