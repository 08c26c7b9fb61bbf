use sqlx::SqlitePool;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL UNIQUE,
  description TEXT,
  schedule TEXT,
  max_participants INTEGER NOT NULL DEFAULT 0
)
"#;

const SQL_CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  email TEXT NOT NULL
)
"#;

const SQL_CREATE_PARTICIPATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS participations (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  activity_id INTEGER NOT NULL REFERENCES activities(id),
  user_id INTEGER NOT NULL REFERENCES users(id),
  UNIQUE (activity_id, user_id)
)
"#;

/// Creates the three tables. Safe to call on every startup.
pub async fn initialize(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    sqlx::query(SQL_CREATE_USERS).execute(pool).await?;
    sqlx::query(SQL_CREATE_PARTICIPATIONS).execute(pool).await?;
    Ok(())
}
