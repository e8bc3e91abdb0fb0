use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db;
use crate::models::PaymentStatus;
use crate::payments::gateway::CallbackOutcome;
use crate::utils::error::AppError;

/// What a callback did to the booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileResult {
    /// The booking was PENDING and transitioned to the outcome's status.
    Applied(PaymentStatus),
    /// The booking already holds the given terminal status; the callback
    /// was a no-op. Repeated or late callbacks land here.
    AlreadyTerminal(String),
    /// No booking with that id exists.
    NotFound,
}

/// Maps the conditional update's effect to a result. `existing_status` is
/// the row's current status when zero rows were touched, `None` when the
/// row does not exist.
pub fn interpret_update(
    rows_affected: u64,
    applied: PaymentStatus,
    existing_status: Option<String>,
) -> ReconcileResult {
    if rows_affected > 0 {
        return ReconcileResult::Applied(applied);
    }
    match existing_status {
        Some(status) => ReconcileResult::AlreadyTerminal(status),
        None => ReconcileResult::NotFound,
    }
}

/// Transitions a booking per the gateway outcome. The update is guarded on
/// `payment_status = 'PENDING'`, so only the first terminal transition wins;
/// later callbacks observe zero rows affected and are reported (not
/// re-applied).
pub async fn reconcile(
    pool: &PgPool,
    booking_id: Uuid,
    outcome: &CallbackOutcome,
) -> Result<ReconcileResult, AppError> {
    let rows = db::bookings::mark_payment(pool, booking_id, outcome).await?;

    let existing = if rows == 0 {
        db::bookings::payment_status(pool, booking_id).await?
    } else {
        None
    };

    let result = interpret_update(rows, outcome.status, existing);

    match &result {
        ReconcileResult::Applied(status) => {
            info!(
                booking_id = %booking_id,
                status = %status,
                transaction_id = ?outcome.transaction_id,
                "Payment status transition applied"
            );
        }
        ReconcileResult::AlreadyTerminal(status) => {
            warn!(
                booking_id = %booking_id,
                current_status = %status,
                attempted_status = %outcome.status,
                "Callback for booking already in a terminal state, ignoring"
            );
        }
        ReconcileResult::NotFound => {
            warn!(booking_id = %booking_id, "Callback for unknown booking");
        }
    }

    Ok(result)
}
