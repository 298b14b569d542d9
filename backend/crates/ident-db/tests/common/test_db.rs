use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ident_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Number of identity rows, read directly
pub async fn count_identities(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM identities")
        .fetch_one(pool)
        .await
        .expect("Failed to count identities")
}
