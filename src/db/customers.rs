use sqlx::PgExecutor;
use uuid::Uuid;

/// An absent or empty incoming phone means "keep what is stored". Only a
/// non-empty phone participates in the upsert's COALESCE.
pub fn normalize_phone(phone: Option<&str>) -> Option<&str> {
    phone.filter(|p| !p.is_empty())
}

/// Finds-or-creates the customer for `email` and returns its id.
///
/// The unique index on `customers.email` makes this safe under concurrent
/// bookings for the same new email: both callers land on the same row.
/// Name is always refreshed; phone is only overwritten when the incoming
/// value is non-empty.
pub async fn resolve_customer<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
    name: &str,
    phone: Option<&str>,
) -> Result<Uuid, sqlx::Error> {
    let phone = normalize_phone(phone);

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO customers (id, name, email, phone)
           VALUES ($1, $2, $3, $4)
           ON CONFLICT (email) DO UPDATE
           SET name = EXCLUDED.name,
               phone = COALESCE(EXCLUDED.phone, customers.phone),
               updated_at = NOW()
           RETURNING id"#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(phone)
    .fetch_one(executor)
    .await?;

    Ok(id)
}
