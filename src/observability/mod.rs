//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / server / lifecycle
//!     → tracing events with structured fields (minute, address, ...)
//!     → logging.rs subscriber (text or JSON on stdout)
//!
//! tower-http TraceLayer
//!     → one span per request, tagged with the x-request-id
//! ```

pub mod logging;

pub use logging::init_logging;
