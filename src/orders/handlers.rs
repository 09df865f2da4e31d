use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::server::AppState;
use crate::orders::catalog::sample_orders;
use crate::orders::failure_injection::{decide, Outcome, FAILURE_MESSAGE};
use crate::orders::model::{ErrorResponse, OrdersResponse};

/// `/orders`: the sample orders on odd minutes, a synthetic 500 on even ones.
///
/// Nothing from the request is read; the clock alone picks the outcome.
pub async fn list_orders(State(state): State<AppState>) -> Response {
    let minute = state.clock.current_minute();

    match decide(minute) {
        Outcome::Fail => {
            tracing::warn!(minute, "Even minute, returning simulated failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(FAILURE_MESSAGE)),
            )
                .into_response()
        }
        Outcome::Serve => {
            tracing::debug!(minute, "Serving sample orders");
            (
                StatusCode::OK,
                Json(OrdersResponse {
                    orders: sample_orders(),
                }),
            )
                .into_response()
        }
    }
}

/// Fallback for every other path, kept JSON like the rest of the API.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
