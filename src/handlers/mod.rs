pub mod bookings;
pub mod callbacks;
pub mod templates;

use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::utils::response::success;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "ringside-api",
    };

    success(payload, "Health check successful").into_response()
}
