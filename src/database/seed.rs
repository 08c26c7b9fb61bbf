use sqlx::SqlitePool;

use crate::database::activities_repo::{self, NewActivity};

/// First-run catalog. Inserted once, only when the activities table is empty.
pub const SEED_ACTIVITIES: &[NewActivity<'static>] = &[
    NewActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
    },
    NewActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
    },
    NewActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
    },
    NewActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
    },
    NewActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
    },
    NewActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
    },
    NewActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
    },
    NewActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
    },
    NewActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
    },
];

/// Inserts the seed catalog when no activity rows exist yet.
///
/// The guard is table-wide, not per-name: a single pre-existing row skips
/// seeding entirely.
pub async fn seed_if_empty(pool: &SqlitePool) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;

    if activities_repo::any_exist(&mut *tx).await? {
        return Ok(());
    }

    for activity in SEED_ACTIVITIES {
        activities_repo::insert(&mut *tx, activity).await?;
    }

    tx.commit().await
}
