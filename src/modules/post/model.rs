use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::post::schema::CommentEntity;

#[derive(Deserialize, Validate)]
pub struct CreatePostModel {
    #[validate(length(min = 1, max = 280, message = "Content must be 1 to 280 characters long"))]
    pub content: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateCommentModel {
    #[validate(length(min = 1, message = "Comment cannot be empty"))]
    pub content: String,
}

#[derive(Deserialize, Validate)]
pub struct PopularQuery {
    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    pub limit: Option<i64>,
}

/// Author identity frozen at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: Uuid,
    pub team_name: String,
    pub tag: Option<String>,
}

pub struct InsertPost {
    pub author_id: Uuid,
    pub content: String,
}

pub struct InsertComment {
    pub post_id: Uuid,
    pub author: PostAuthor,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub author: PostAuthor,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CommentEntity> for CommentResponse {
    fn from(entity: CommentEntity) -> Self {
        CommentResponse {
            author: PostAuthor {
                id: entity.author_id,
                team_name: entity.author_name,
                tag: entity.author_tag,
            },
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}

/// One feed entry: the post, its author as currently named, and the live
/// like count. Comments are attached by the service.
#[derive(sqlx::FromRow)]
pub struct FeedRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub author_name: String,
    pub author_tag: Option<String>,
    pub likes_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub author: PostAuthor,
    pub likes_count: i64,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: i64,
}
