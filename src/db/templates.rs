use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{EventTemplate, EventTemplateTicket};

/// Materializes one event from a template: copies the template's
/// title/venue/region/times onto a new event row and clones its ticket
/// definitions, all in one transaction. The scheduling that decides WHEN to
/// call this lives outside the server.
///
/// Returns `None` when the template does not exist or is inactive.
pub async fn expand_template(
    pool: &PgPool,
    template_id: Uuid,
    event_date: NaiveDate,
) -> Result<Option<Uuid>, sqlx::Error> {
    let template = sqlx::query_as::<_, EventTemplate>(
        r#"SELECT id, title, venue_id, region_id, start_time, end_time,
                  day_of_week, is_active, created_at, updated_at
           FROM event_templates
           WHERE id = $1 AND is_active = true"#,
    )
    .bind(template_id)
    .fetch_optional(pool)
    .await?;

    let Some(template) = template else {
        return Ok(None);
    };

    let tickets = sqlx::query_as::<_, EventTemplateTicket>(
        r#"SELECT id, template_id, seat_type, price, discounted_price, cost, capacity
           FROM event_template_tickets
           WHERE template_id = $1"#,
    )
    .bind(template_id)
    .fetch_all(pool)
    .await?;

    let event_id = Uuid::new_v4();
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"INSERT INTO events
               (id, title, event_date, start_time, end_time, venue_id, region_id,
                status, template_id)
           VALUES ($1, $2, $3, $4, $5, $6, $7, 'SCHEDULED', $8)"#,
    )
    .bind(event_id)
    .bind(&template.title)
    .bind(event_date)
    .bind(template.start_time)
    .bind(template.end_time)
    .bind(template.venue_id)
    .bind(template.region_id)
    .bind(template.id)
    .execute(&mut *tx)
    .await?;

    for ticket in &tickets {
        sqlx::query(
            r#"INSERT INTO event_tickets
                   (id, event_id, seat_type, price, discounted_price, cost, capacity, sold_count)
               VALUES ($1, $2, $3, $4, $5, $6, $7, 0)"#,
        )
        .bind(Uuid::new_v4())
        .bind(event_id)
        .bind(&ticket.seat_type)
        .bind(ticket.price)
        .bind(ticket.discounted_price)
        .bind(ticket.cost)
        .bind(ticket.capacity)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        template_id = %template_id,
        event_id = %event_id,
        tickets = tickets.len(),
        "Expanded event template"
    );

    Ok(Some(event_id))
}
