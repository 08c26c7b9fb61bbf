use sqlx::SqliteExecutor;

use crate::models::ActivityRow;

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?1
LIMIT 1
"#;

pub async fn find_by_name(
    executor: impl SqliteExecutor<'_>,
    name: &str,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(executor)
        .await
}

const SQL_LIST_ALL: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY id ASC
"#;

pub async fn list_all(executor: impl SqliteExecutor<'_>) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ALL)
        .fetch_all(executor)
        .await
}

const SQL_ANY_EXIST: &str = r#"
SELECT EXISTS (SELECT 1 FROM activities)
"#;

pub async fn any_exist(executor: impl SqliteExecutor<'_>) -> sqlx::Result<bool> {
    let exists: i64 = sqlx::query_scalar(SQL_ANY_EXIST).fetch_one(executor).await?;
    Ok(exists != 0)
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
}

pub async fn insert(
    executor: impl SqliteExecutor<'_>,
    activity: &NewActivity<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}
