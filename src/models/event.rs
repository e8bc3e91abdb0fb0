use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A fight event. Owned by admin workflows and the template expander; the
/// booking core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub venue_id: Option<Uuid>,
    pub region_id: Option<Uuid>,
    pub status: String,
    pub is_deleted: bool,
    pub template_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A purchasable ticket type belonging to one event. `discounted_price`
/// takes precedence over `price` when present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventTicket {
    pub id: Uuid,
    pub event_id: Uuid,
    pub seat_type: String,
    pub price: Decimal,
    pub discounted_price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub capacity: i32,
    pub sold_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
