use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::db;
use crate::models::{BookingLineItem, Event, EventTicket};
use crate::utils::error::AppError;

/// Display fallback when an event's venue or region reference is null or
/// no longer resolvable. A missing name is not a data error.
pub const UNRESOLVED_NAME: &str = "N/A";

/// What to do when a requested ticket-type id does not resolve.
///
/// `SkipUnresolved` is the historical policy of the booking endpoint: the
/// selection is dropped with a warning and the booking proceeds with
/// whatever did resolve (possibly nothing). `FailOnUnresolved` rejects the
/// whole request instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedTicketPolicy {
    SkipUnresolved,
    FailOnUnresolved,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TicketSelection {
    pub id: Uuid,
    pub quantity: i32,
}

/// Denormalized copy of event/venue/region/ticket data captured at booking
/// time. Stored on the booking row and never re-derived, so later edits to
/// the source records cannot alter what the customer saw and paid for.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSnapshot {
    pub event_title: String,
    pub event_date: NaiveDate,
    pub venue_name: String,
    pub region_name: String,
    pub items: Vec<BookingLineItem>,
}

/// Prices one resolved selection: the discounted price wins when present,
/// and the cost basis is carried as an explicit null when absent.
pub fn line_item(ticket: &EventTicket, quantity: i32) -> BookingLineItem {
    BookingLineItem {
        seat_type: ticket.seat_type.clone(),
        quantity,
        price_paid: ticket.discounted_price.unwrap_or(ticket.price),
        cost_at_booking: ticket.cost,
    }
}

/// Assembles the snapshot from already-fetched rows. Pure; the I/O lives in
/// [`load_snapshot`].
pub fn build_snapshot(
    event: &Event,
    venue_name: Option<String>,
    region_name: Option<String>,
    resolved: &[(EventTicket, i32)],
) -> BookingSnapshot {
    BookingSnapshot {
        event_title: event.title.clone(),
        event_date: event.event_date,
        venue_name: venue_name.unwrap_or_else(|| UNRESOLVED_NAME.to_string()),
        region_name: region_name.unwrap_or_else(|| UNRESOLVED_NAME.to_string()),
        items: resolved
            .iter()
            .map(|(ticket, quantity)| line_item(ticket, *quantity))
            .collect(),
    }
}

/// Serializes line items for the `booking_items` column. An empty list is
/// stored as NULL, never as `[]`.
pub fn items_json(items: &[BookingLineItem]) -> Option<serde_json::Value> {
    if items.is_empty() {
        None
    } else {
        serde_json::to_value(items).ok()
    }
}

/// Resolves the event, its venue/region names and the requested ticket
/// types, then builds the snapshot.
pub async fn load_snapshot(
    pool: &PgPool,
    event_id: Uuid,
    selections: &[TicketSelection],
    policy: UnresolvedTicketPolicy,
) -> Result<BookingSnapshot, AppError> {
    let event = db::events::find_event(pool, event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id)))?;

    let venue_name = db::events::venue_name(pool, event.venue_id).await?;
    let region_name = db::events::region_name(pool, event.region_id).await?;

    let mut resolved = Vec::with_capacity(selections.len());
    for selection in selections {
        match db::events::find_ticket(pool, selection.id).await? {
            Some(ticket) => resolved.push((ticket, selection.quantity)),
            None => match policy {
                UnresolvedTicketPolicy::SkipUnresolved => {
                    warn!(
                        event_id = %event_id,
                        ticket_id = %selection.id,
                        "Ticket type did not resolve, skipping selection"
                    );
                }
                UnresolvedTicketPolicy::FailOnUnresolved => {
                    return Err(AppError::validation_with_details(
                        "Ticket type did not resolve",
                        serde_json::json!({ "ticketId": selection.id }),
                    ));
                }
            },
        }
    }

    Ok(build_snapshot(&event, venue_name, region_name, &resolved))
}
