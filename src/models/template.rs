use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Recurring-event blueprint. A cron job (out of scope here) picks active
/// templates and calls the expander to materialize Event rows from them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventTemplate {
    pub id: Uuid,
    pub title: String,
    pub venue_id: Option<Uuid>,
    pub region_id: Option<Uuid>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub day_of_week: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ticket definition cloned onto each event the template produces.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventTemplateTicket {
    pub id: Uuid,
    pub template_id: Uuid,
    pub seat_type: String,
    pub price: Decimal,
    pub discounted_price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub capacity: i32,
}
