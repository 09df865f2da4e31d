//! Minute-based failure injection.
//!
//! # Rule
//! ```text
//! even minute (0, 2, ..., 58) → Fail   (HTTP 500)
//! odd minute  (1, 3, ..., 59) → Serve  (HTTP 200 + orders)
//! ```
//!
//! The rule alternates every minute so a client-side circuit breaker sees a
//! full open/close cycle within a couple of minutes. It is not configurable.

/// Message carried in the body of an injected failure.
pub const FAILURE_MESSAGE: &str = "Service temporarily unavailable (testing circuit breaker)";

/// What the orders endpoint should do for a given minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Return the sample orders.
    Serve,
    /// Return a synthetic 500.
    Fail,
}

/// Decide the outcome for `minute`. Pure; no clock access.
pub fn decide(minute: u32) -> Outcome {
    if minute % 2 == 0 {
        Outcome::Fail
    } else {
        Outcome::Serve
    }
}
