use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::booking::snapshot::UnresolvedTicketPolicy;
use crate::booking::writer;
use crate::db;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::AppState;

/// POST /bookings
///
/// Unresolvable ticket ids are skipped rather than failing the request;
/// that is the documented policy of this endpoint.
pub async fn create_booking(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let request = match writer::parse_request(&body) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    match writer::create_booking(
        &state.pool,
        request,
        UnresolvedTicketPolicy::SkipUnresolved,
    )
    .await
    {
        Ok(result) => created(result, "Booking created").into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /bookings/:id — read side for the confirmation page.
pub async fn get_booking(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match db::bookings::find_booking(&state.pool, id).await {
        Ok(Some(booking)) => success(booking, "Booking retrieved").into_response(),
        Ok(None) => {
            AppError::NotFound(format!("Booking with id '{}' was not found", id)).into_response()
        }
        Err(e) => AppError::DatabaseError(e).into_response(),
    }
}
