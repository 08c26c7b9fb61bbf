#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipationRow {
    pub id: i64,
    pub activity_id: i64,
    pub user_id: i64,
}
