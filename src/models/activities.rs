#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    /// 0 means no cap is enforced.
    pub max_participants: i64,
}
