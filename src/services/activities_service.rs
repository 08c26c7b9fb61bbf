use serde_json::{json, Map, Value};
use sqlx::SqlitePool;

use crate::database::{activities_repo, participations_repo};

/// Builds the activities overview: name → details plus the signed-up emails.
///
/// Keys follow activity insertion order, participant lists follow signup
/// order.
pub async fn activities_overview(pool: &SqlitePool) -> sqlx::Result<Map<String, Value>> {
    let mut conn = pool.acquire().await?;

    let activities = activities_repo::list_all(&mut *conn).await?;

    let mut out = Map::new();
    for activity in activities {
        let participants =
            participations_repo::list_emails_for_activity(&mut *conn, activity.id).await?;

        out.insert(
            activity.name,
            json!({
                "description": activity.description,
                "schedule": activity.schedule,
                "max_participants": activity.max_participants,
                "participants": participants,
            }),
        );
    }

    Ok(out)
}
