use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payment lifecycle of a booking. `Completed` and `Failed` are terminal:
/// the reconciler's conditional update only fires while the row is still
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(PaymentStatus::Pending),
            "COMPLETED" => Some(PaymentStatus::Completed),
            "FAILED" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a booking, embedded in the `booking_items` jsonb column.
/// Captures the price and cost in effect at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLineItem {
    pub seat_type: String,
    pub quantity: i32,
    pub price_paid: Decimal,
    pub cost_at_booking: Option<Decimal>,
}

/// The central row of the booking core. The `customer_*`, `event_title`,
/// `event_date`, `venue_name`, `region_name` and `booking_items` columns are
/// a snapshot copied at creation time and never re-derived from live tables.
/// `event_id` is deliberately not a foreign key so the booking survives
/// event deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub event_id: Uuid,

    // Snapshot fields, immutable once written.
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub event_title: String,
    pub event_date: NaiveDate,
    pub venue_name: String,
    pub region_name: String,
    pub booking_items: Option<serde_json::Value>,
    pub total_cost: Decimal,

    // Mutable payment audit fields, written by the reconciler.
    pub payment_status: String,
    pub payment_transaction_id: Option<String>,
    pub payment_method: Option<String>,
    pub payment_bank_code: Option<String>,
    pub payment_bank_ref_code: Option<String>,
    pub payment_date: Option<String>,
    pub payment_order_no: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_round_trips() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
        ] {
            assert_eq!(PaymentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PaymentStatus::parse("pending"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(PaymentStatus::Completed.is_terminal());
        assert!(PaymentStatus::Failed.is_terminal());
    }
}
