//! Order endpoint.
//!
//! # Data Flow
//! ```text
//! request on /orders
//!     → handlers.rs (read minute from the Clock)
//!     → failure_injection.rs (even → Fail, odd → Serve)
//!     → catalog.rs (fixed sample orders, Serve only)
//!     → model.rs (JSON body)
//! ```

pub mod catalog;
pub mod failure_injection;
pub mod handlers;
pub mod model;

pub use failure_injection::{decide, Outcome, FAILURE_MESSAGE};
pub use model::{ErrorResponse, Order, OrderStatus, OrdersResponse};
