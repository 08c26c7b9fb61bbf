use sqlx::SqliteExecutor;

use crate::models::ParticipationRow;

const SQL_FIND_FOR_PAIR: &str = r#"
SELECT
  id,
  activity_id,
  user_id
FROM participations
WHERE activity_id = ?1
  AND user_id = ?2
LIMIT 1
"#;

pub async fn find_for_pair(
    executor: impl SqliteExecutor<'_>,
    activity_id: i64,
    user_id: i64,
) -> sqlx::Result<Option<ParticipationRow>> {
    sqlx::query_as::<_, ParticipationRow>(SQL_FIND_FOR_PAIR)
        .bind(activity_id)
        .bind(user_id)
        .fetch_optional(executor)
        .await
}

const SQL_COUNT_FOR_ACTIVITY: &str = r#"
SELECT COUNT(*)
FROM participations
WHERE activity_id = ?1
"#;

pub async fn count_for_activity(
    executor: impl SqliteExecutor<'_>,
    activity_id: i64,
) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_COUNT_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_one(executor)
        .await
}

const SQL_LIST_EMAILS_FOR_ACTIVITY: &str = r#"
SELECT u.email
FROM participations p
JOIN users u
  ON u.id = p.user_id
WHERE p.activity_id = ?1
ORDER BY p.id ASC
"#;

pub async fn list_emails_for_activity(
    executor: impl SqliteExecutor<'_>,
    activity_id: i64,
) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar(SQL_LIST_EMAILS_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(executor)
        .await
}

const SQL_INSERT_PARTICIPATION: &str = r#"
INSERT INTO participations (
  activity_id,
  user_id
) VALUES (?, ?)
"#;

pub async fn insert(
    executor: impl SqliteExecutor<'_>,
    activity_id: i64,
    user_id: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPATION)
        .bind(activity_id)
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPATION: &str = r#"
DELETE FROM participations
WHERE id = ?1
"#;

pub async fn delete(executor: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPATION)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}
