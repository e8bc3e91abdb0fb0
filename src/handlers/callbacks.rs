use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;
use uuid::Uuid;

use crate::models::PaymentStatus;
use crate::payments::gateway::{
    self, ChillPayCallback, Gateway, ModernPayCallback,
};
use crate::payments::reconcile::{reconcile, ReconcileResult};
use crate::utils::error::AppError;
use crate::utils::response::success;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub source: Option<String>,
    #[serde(rename = "bookingId")]
    pub booking_id: Option<Uuid>,
}

/// POST /payment-callback?source=&bookingId=
///
/// Gateway servers call this with a JSON body; the response is JSON.
pub async fn payment_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
    Json(body): Json<Value>,
) -> Response {
    let Some(source) = params.source else {
        return AppError::validation("Missing source").into_response();
    };
    let Some(gateway) = Gateway::parse(&source) else {
        return AppError::UnknownGateway(source).into_response();
    };
    let Some(booking_id) = params.booking_id else {
        return AppError::validation("Missing bookingId").into_response();
    };

    let outcome = match gateway {
        Gateway::ModernPay => {
            let payload: ModernPayCallback = match serde_json::from_value(body) {
                Ok(payload) => payload,
                Err(e) => {
                    return AppError::validation(format!("Invalid callback payload: {}", e))
                        .into_response()
                }
            };
            gateway::parse_modernpay(&payload)
        }
        Gateway::ChillPay => {
            let payload: ChillPayCallback = match serde_json::from_value(body) {
                Ok(payload) => payload,
                Err(e) => {
                    return AppError::validation(format!("Invalid callback payload: {}", e))
                        .into_response()
                }
            };
            gateway::parse_chillpay(&payload)
        }
    };

    match reconcile(&state.pool, booking_id, &outcome).await {
        Ok(ReconcileResult::Applied(status)) => success(
            json!({ "bookingId": booking_id, "paymentStatus": status.as_str() }),
            "Payment status updated",
        )
        .into_response(),
        Ok(ReconcileResult::AlreadyTerminal(status)) => success(
            json!({ "bookingId": booking_id, "paymentStatus": status }),
            "Booking already reconciled",
        )
        .into_response(),
        Ok(ReconcileResult::NotFound) => {
            AppError::NotFound(format!("Booking with id '{}' was not found", booking_id))
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /chillpay-callback
///
/// The caller here is the customer's browser redirected back from the
/// gateway, so every outcome — including errors — becomes a redirect to
/// the confirmation page rather than a JSON body. The status transition is
/// persisted through the same reconciler as the POST callback.
pub async fn chillpay_callback(
    State(state): State<AppState>,
    Query(payload): Query<ChillPayCallback>,
) -> Response {
    let base = &state.config.confirmation_page_url;

    let Some(booking_id) = payload.booking_id else {
        return confirmation_redirect(base, "error", "Missing bookingId", None);
    };

    let outcome = gateway::parse_chillpay(&payload);
    let gateway_message = outcome.message.clone();

    match reconcile(&state.pool, booking_id, &outcome).await {
        Ok(ReconcileResult::Applied(PaymentStatus::Completed)) => confirmation_redirect(
            base,
            "success",
            gateway_message.as_deref().unwrap_or("Payment completed"),
            Some(booking_id),
        ),
        Ok(ReconcileResult::Applied(_)) => confirmation_redirect(
            base,
            "failed",
            gateway_message.as_deref().unwrap_or("Payment failed"),
            Some(booking_id),
        ),
        Ok(ReconcileResult::AlreadyTerminal(status)) => {
            let outcome_status = if status == PaymentStatus::Completed.as_str() {
                "success"
            } else {
                "failed"
            };
            confirmation_redirect(base, outcome_status, "Booking already reconciled", Some(booking_id))
        }
        Ok(ReconcileResult::NotFound) => {
            confirmation_redirect(base, "error", "Booking not found", Some(booking_id))
        }
        Err(e) => {
            error!(booking_id = %booking_id, error = ?e, "ChillPay callback failed");
            confirmation_redirect(base, "error", "Unable to process payment callback", Some(booking_id))
        }
    }
}

/// Gateways land the browser back here via a plain 302.
fn confirmation_redirect(
    base: &str,
    status: &str,
    message: &str,
    booking_id: Option<Uuid>,
) -> Response {
    let url = confirmation_url(base, status, message, booking_id);
    (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
}

fn confirmation_url(base: &str, status: &str, message: &str, booking_id: Option<Uuid>) -> String {
    let mut url = format!(
        "{}?status={}&message={}",
        base,
        status,
        urlencoding::encode(message)
    );
    if let Some(id) = booking_id {
        url.push_str("&bookingId=");
        url.push_str(&id.to_string());
    }
    url
}
