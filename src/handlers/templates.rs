use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::db;
use crate::utils::error::AppError;
use crate::utils::response::created;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandTemplateRequest {
    pub event_date: NaiveDate,
}

/// POST /event-templates/:id/expand
///
/// Materializes one event from a template. The cron job that decides when
/// to expand lives outside this server and calls this endpoint.
pub async fn expand_template(
    State(state): State<AppState>,
    Path(template_id): Path<Uuid>,
    Json(request): Json<ExpandTemplateRequest>,
) -> Response {
    match db::templates::expand_template(&state.pool, template_id, request.event_date).await {
        Ok(Some(event_id)) => {
            created(json!({ "eventId": event_id }), "Event created from template").into_response()
        }
        Ok(None) => AppError::NotFound(format!(
            "Active template with id '{}' was not found",
            template_id
        ))
        .into_response(),
        Err(e) => AppError::DatabaseError(e).into_response(),
    }
}
