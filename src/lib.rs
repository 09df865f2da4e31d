//! Order service library.
//!
//! Serves a fixed list of orders on `/orders`, failing with a synthetic 500
//! on every even wall-clock minute so clients can exercise their circuit
//! breakers.

pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod orders;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ServiceConfig;
pub use error::{ConfigError, ServiceError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
