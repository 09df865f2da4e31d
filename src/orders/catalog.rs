//! The fixed sample orders served on healthy minutes.

use rust_decimal::Decimal;

use crate::orders::model::{Order, OrderStatus};

/// Build the sample order list. Same content and order on every call.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new("ORD-001", Decimal::new(12050, 2), OrderStatus::Created),
        Order::new("ORD-002", Decimal::new(8999, 2), OrderStatus::Paid),
        Order::new("ORD-003", Decimal::new(4500, 2), OrderStatus::Shipped),
    ]
}
