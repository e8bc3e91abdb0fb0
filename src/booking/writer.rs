use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::booking::snapshot::{self, TicketSelection, UnresolvedTicketPolicy};
use crate::db;
use crate::db::bookings::NewBooking;
use crate::utils::error::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub event_id: Uuid,
    pub contact_info: ContactInfo,
    pub tickets: Vec<TicketSelection>,
    pub total_cost: Decimal,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBooking {
    pub booking_id: Uuid,
    pub customer_id: Uuid,
}

/// Structural validation of the inbound body, reporting every missing
/// required field at once rather than failing on the first.
pub fn parse_request(body: &Value) -> Result<CreateBookingRequest, AppError> {
    let mut missing: Vec<&str> = Vec::new();

    if is_absent(body.get("eventId")) {
        missing.push("eventId");
    }

    match body.get("contactInfo") {
        Some(contact) if !contact.is_null() => {
            if is_absent(contact.get("fullName")) {
                missing.push("contactInfo.fullName");
            }
            if is_absent(contact.get("email")) {
                missing.push("contactInfo.email");
            }
        }
        _ => missing.push("contactInfo"),
    }

    if is_absent(body.get("tickets")) {
        missing.push("tickets");
    }
    if is_absent(body.get("totalCost")) {
        missing.push("totalCost");
    }

    if !missing.is_empty() {
        return Err(AppError::validation_with_details(
            "Missing required fields",
            serde_json::json!({ "missing": missing }),
        ));
    }

    if !body["tickets"].is_array() {
        return Err(AppError::validation("tickets must be an array"));
    }

    let request: CreateBookingRequest = serde_json::from_value(body.clone())
        .map_err(|e| AppError::validation(format!("Invalid booking payload: {}", e)))?;

    let email = request.contact_info.email.trim();
    if !email.contains('@') || !email.contains('.') {
        return Err(AppError::validation_with_details(
            "contactInfo.email must be a well-formed email address",
            serde_json::json!({ "field": "contactInfo.email" }),
        ));
    }

    for selection in &request.tickets {
        if selection.quantity < 1 {
            return Err(AppError::validation_with_details(
                "Ticket quantity must be a positive integer",
                serde_json::json!({ "ticketId": selection.id }),
            ));
        }
    }

    Ok(request)
}

fn is_absent(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_null)
}

/// Creates a PENDING booking: resolves the customer, snapshots the event
/// data and writes the row. The customer upsert and booking insert share
/// one transaction, so a failure partway through leaves nothing behind.
pub async fn create_booking(
    pool: &PgPool,
    request: CreateBookingRequest,
    policy: UnresolvedTicketPolicy,
) -> Result<CreatedBooking, AppError> {
    let snap = snapshot::load_snapshot(pool, request.event_id, &request.tickets, policy).await?;

    let booking_id = Uuid::new_v4();
    let contact = &request.contact_info;

    let mut tx = pool.begin().await?;

    let customer_id = db::customers::resolve_customer(
        &mut *tx,
        &contact.email,
        &contact.full_name,
        contact.phone.as_deref(),
    )
    .await?;

    let booking = NewBooking {
        id: booking_id,
        customer_id,
        event_id: request.event_id,
        customer_name: contact.full_name.clone(),
        customer_email: contact.email.clone(),
        customer_phone: contact.phone.clone(),
        event_title: snap.event_title,
        event_date: snap.event_date,
        venue_name: snap.venue_name,
        region_name: snap.region_name,
        booking_items: snapshot::items_json(&snap.items),
        total_cost: request.total_cost,
    };

    db::bookings::insert_booking(&mut *tx, &booking).await?;

    tx.commit().await?;

    info!(
        booking_id = %booking_id,
        customer_id = %customer_id,
        event_id = %request.event_id,
        items = snap.items.len(),
        "Booking created"
    );

    Ok(CreatedBooking {
        booking_id,
        customer_id,
    })
}
