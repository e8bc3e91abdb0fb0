use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Event, EventTicket};

/// Fetches an event for booking. Soft-deleted events are treated as absent.
pub async fn find_event(pool: &PgPool, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"SELECT id, title, event_date, start_time, end_time, venue_id, region_id,
                  status, is_deleted, template_id, created_at, updated_at
           FROM events
           WHERE id = $1 AND is_deleted = false"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn venue_name(pool: &PgPool, venue_id: Option<Uuid>) -> Result<Option<String>, sqlx::Error> {
    let Some(venue_id) = venue_id else {
        return Ok(None);
    };

    sqlx::query_scalar::<_, String>("SELECT name FROM venues WHERE id = $1")
        .bind(venue_id)
        .fetch_optional(pool)
        .await
}

pub async fn region_name(
    pool: &PgPool,
    region_id: Option<Uuid>,
) -> Result<Option<String>, sqlx::Error> {
    let Some(region_id) = region_id else {
        return Ok(None);
    };

    sqlx::query_scalar::<_, String>("SELECT name FROM regions WHERE id = $1")
        .bind(region_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_ticket(pool: &PgPool, id: Uuid) -> Result<Option<EventTicket>, sqlx::Error> {
    sqlx::query_as::<_, EventTicket>(
        r#"SELECT id, event_id, seat_type, price, discounted_price, cost,
                  capacity, sold_count, created_at, updated_at
           FROM event_tickets
           WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
