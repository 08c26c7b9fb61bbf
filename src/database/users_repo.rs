use sqlx::SqliteExecutor;

use crate::models::UserRow;

const SQL_FIND_BY_EMAIL: &str = r#"
SELECT
  id,
  email
FROM users
WHERE email = ?1
LIMIT 1
"#;

// Email is not unique at the storage level; LIMIT 1 takes the oldest row.
pub async fn find_by_email(
    executor: impl SqliteExecutor<'_>,
    email: &str,
) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_FIND_BY_EMAIL)
        .bind(email)
        .fetch_optional(executor)
        .await
}

const SQL_INSERT_USER: &str = r#"
INSERT INTO users (email) VALUES (?)
"#;

pub async fn insert(executor: impl SqliteExecutor<'_>, email: &str) -> sqlx::Result<UserRow> {
    let res = sqlx::query(SQL_INSERT_USER)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(UserRow {
        id: res.last_insert_rowid(),
        email: email.to_string(),
    })
}
