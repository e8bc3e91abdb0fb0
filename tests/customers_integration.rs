use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use ringside_server::db::customers::resolve_customer;

/// Runs only when TEST_DATABASE_URL points at a disposable Postgres; the
/// tests are no-ops otherwise.
async fn test_pool() -> Option<PgPool> {
    dotenvy::dotenv().ok();
    let url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect test db");
    sqlx::migrate!().run(&pool).await.expect("migrations");

    Some(pool)
}

#[tokio::test]
async fn resolver_keeps_one_row_per_email_and_merges_name_and_phone() {
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping resolver test");
        return;
    };

    let email = format!("resolver_{}@example.com", Uuid::new_v4());

    let first = resolve_customer(&pool, &email, "Jane Doe", Some("0811111111"))
        .await
        .expect("first resolve");

    // Same email with an empty phone: name refreshed, phone preserved.
    let second = resolve_customer(&pool, &email, "Janet Doe", Some(""))
        .await
        .expect("second resolve");
    assert_eq!(first, second);

    let row = sqlx::query("SELECT name, phone FROM customers WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .expect("select customer");
    assert_eq!(row.get::<String, _>("name"), "Janet Doe");
    assert_eq!(
        row.get::<Option<String>, _>("phone").as_deref(),
        Some("0811111111")
    );

    // A non-empty phone does overwrite.
    let third = resolve_customer(&pool, &email, "Janet Doe", Some("0822222222"))
        .await
        .expect("third resolve");
    assert_eq!(third, first);

    let phone: Option<String> =
        sqlx::query_scalar("SELECT phone FROM customers WHERE email = $1")
            .bind(&email)
            .fetch_one(&pool)
            .await
            .expect("select phone");
    assert_eq!(phone.as_deref(), Some("0822222222"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .expect("count customers");
    assert_eq!(count, 1);

    let _ = sqlx::query("DELETE FROM customers WHERE email = $1")
        .bind(&email)
        .execute(&pool)
        .await;
}
