//! Wire types for the orders endpoint.

use rust_decimal::Decimal;
use serde::{ser::Error as _, Serialize, Serializer};

/// Lifecycle stage of an order, rendered as an upper-case token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Paid,
    Shipped,
}

/// A sample purchase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: String,
    #[serde(serialize_with = "amount_as_number")]
    pub amount: Decimal,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: impl Into<String>, amount: Decimal, status: OrderStatus) -> Self {
        Self {
            id: id.into(),
            amount,
            status,
        }
    }
}

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Body of any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Emit a decimal amount as a JSON number rather than a string.
///
/// Goes through the decimal's text form so the float is the nearest one to
/// the written value (`89.99` stays `89.99`).
fn amount_as_number<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // std's float parser is correctly rounded. `Decimal::to_f64`, which
    // `rust_decimal::serde::float` relies on, makes no such promise.
    let value: f64 = amount
        .normalize()
        .to_string()
        .parse()
        .map_err(|e| S::Error::custom(format!("amount {amount} is not representable: {e}")))?;
    serializer.serialize_f64(value)
}
