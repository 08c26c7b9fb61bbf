use sqlx::{Connection, SqlitePool};
use tracing::info;

use crate::database::{activities_repo, participations_repo, users_repo};
use crate::error::AppError;

/// Signs a student up for an activity by name.
///
/// The user row is created lazily on first signup. That insert commits on
/// its own; a duplicate or capacity failure afterwards does not undo it.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    let mut conn = pool.acquire().await?;

    let Some(activity) = activities_repo::find_by_name(&mut *conn, activity_name).await? else {
        return Err(AppError::ActivityNotFound);
    };

    let user = match users_repo::find_by_email(&mut *conn, email).await? {
        Some(user) => user,
        None => users_repo::insert(&mut *conn, email).await?,
    };

    let mut tx = conn.begin().await?;

    if participations_repo::find_for_pair(&mut *tx, activity.id, user.id)
        .await?
        .is_some()
    {
        return Err(AppError::AlreadySignedUp);
    }

    let count = participations_repo::count_for_activity(&mut *tx, activity.id).await?;
    if activity.max_participants > 0 && count >= activity.max_participants {
        return Err(AppError::ActivityFull);
    }

    if let Err(err) = participations_repo::insert(&mut *tx, activity.id, user.id).await {
        // A concurrent signup can slip past the pre-check; the storage
        // constraint on (activity_id, user_id) catches it here.
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            return Err(AppError::AlreadySignedUp);
        }
        return Err(err.into());
    }

    tx.commit().await?;

    info!("Signed up {} for {}", email, activity_name);
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes a student's signup for an activity by name.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    let mut conn = pool.acquire().await?;

    let Some(activity) = activities_repo::find_by_name(&mut *conn, activity_name).await? else {
        return Err(AppError::ActivityNotFound);
    };

    let Some(user) = users_repo::find_by_email(&mut *conn, email).await? else {
        return Err(AppError::NotSignedUp);
    };

    let mut tx = conn.begin().await?;

    let Some(participation) =
        participations_repo::find_for_pair(&mut *tx, activity.id, user.id).await?
    else {
        return Err(AppError::NotSignedUp);
    };

    participations_repo::delete(&mut *tx, participation.id).await?;
    tx.commit().await?;

    info!("Unregistered {} from {}", email, activity_name);
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
