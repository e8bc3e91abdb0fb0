use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::{Booking, PaymentStatus};
use crate::payments::gateway::CallbackOutcome;

/// Everything needed to persist a new PENDING booking. Snapshot fields are
/// already denormalized by the caller; this module never reads the live
/// event/venue/region tables.
#[derive(Debug)]
pub struct NewBooking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub event_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub event_title: String,
    pub event_date: NaiveDate,
    pub venue_name: String,
    pub region_name: String,
    /// `None` when no ticket selections resolved; the column stores NULL
    /// rather than an empty array.
    pub booking_items: Option<serde_json::Value>,
    pub total_cost: Decimal,
}

pub async fn insert_booking<'e>(
    executor: impl PgExecutor<'e>,
    booking: &NewBooking,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO bookings
               (id, customer_id, event_id,
                customer_name, customer_email, customer_phone,
                event_title, event_date, venue_name, region_name,
                booking_items, total_cost, payment_status)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"#,
    )
    .bind(booking.id)
    .bind(booking.customer_id)
    .bind(booking.event_id)
    .bind(&booking.customer_name)
    .bind(&booking.customer_email)
    .bind(&booking.customer_phone)
    .bind(&booking.event_title)
    .bind(booking.event_date)
    .bind(&booking.venue_name)
    .bind(&booking.region_name)
    .bind(&booking.booking_items)
    .bind(booking.total_cost)
    .bind(PaymentStatus::Pending.as_str())
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn find_booking(pool: &PgPool, id: Uuid) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        r#"SELECT id, customer_id, event_id,
                  customer_name, customer_email, customer_phone,
                  event_title, event_date, venue_name, region_name,
                  booking_items, total_cost,
                  payment_status, payment_transaction_id, payment_method,
                  payment_bank_code, payment_bank_ref_code, payment_date,
                  payment_order_no, created_at, updated_at
           FROM bookings
           WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn payment_status(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT payment_status FROM bookings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Applies a gateway outcome to a booking, but only while it is still
/// PENDING. Returns the number of rows affected: 0 means the booking is
/// either absent or already terminal, and the first terminal transition
/// has won.
pub async fn mark_payment<'e>(
    executor: impl PgExecutor<'e>,
    booking_id: Uuid,
    outcome: &CallbackOutcome,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE bookings
           SET payment_status = $2,
               payment_transaction_id = COALESCE($3, payment_transaction_id),
               payment_method = COALESCE($4, payment_method),
               payment_bank_code = COALESCE($5, payment_bank_code),
               payment_bank_ref_code = COALESCE($6, payment_bank_ref_code),
               payment_date = COALESCE($7, payment_date),
               payment_order_no = COALESCE($8, payment_order_no),
               updated_at = NOW()
           WHERE id = $1 AND payment_status = $9"#,
    )
    .bind(booking_id)
    .bind(outcome.status.as_str())
    .bind(&outcome.transaction_id)
    .bind(&outcome.payment_method)
    .bind(&outcome.bank_code)
    .bind(&outcome.bank_ref_code)
    .bind(&outcome.payment_date)
    .bind(&outcome.order_no)
    .bind(PaymentStatus::Pending.as_str())
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
