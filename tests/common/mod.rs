use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use mergington::database::{schema, seed};

// In-memory SQLite is per-connection; a single-connection pool keeps every
// query on the same database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    schema::initialize(&pool).await.expect("create tables");
    seed::seed_if_empty(&pool).await.expect("seed activities");

    pool
}
