use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct PlayerEntity {
    pub id: Uuid,
    pub nickname: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub team_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
