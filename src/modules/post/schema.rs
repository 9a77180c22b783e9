use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct PostEntity {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A comment row. Owned by its post; the author columns are a snapshot
/// taken when the comment was written, never re-resolved against the
/// current team record.
#[derive(Debug, Clone, FromRow)]
pub struct CommentEntity {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_tag: Option<String>,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
