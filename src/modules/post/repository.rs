use uuid::Uuid;

use crate::api::error;
use crate::modules::post::model::{FeedRow, InsertComment, InsertPost};
use crate::modules::post::schema::{CommentEntity, PostEntity};

#[async_trait::async_trait]
pub trait PostRepository {
    async fn create(&self, post: &InsertPost) -> Result<PostEntity, error::SystemError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PostEntity>, error::SystemError>;

    /// All posts, newest first.
    async fn list_feed(&self) -> Result<Vec<FeedRow>, error::SystemError>;

    /// One team's posts, newest first.
    async fn list_by_author(&self, team_id: &Uuid) -> Result<Vec<FeedRow>, error::SystemError>;

    /// Posts ranked by like count; creation time breaks ties so the
    /// ranking is deterministic.
    async fn list_popular(&self, limit: i64) -> Result<Vec<FeedRow>, error::SystemError>;

    /// Adds the like if absent, removes it if present. Returns whether the
    /// team now likes the post and the resulting count.
    async fn toggle_like(
        &self,
        post_id: &Uuid,
        team_id: &Uuid,
    ) -> Result<(bool, i64), error::SystemError>;

    async fn insert_comment(
        &self,
        comment: &InsertComment,
    ) -> Result<CommentEntity, error::SystemError>;

    /// Comments for a set of posts, oldest first within each post.
    async fn comments_for(
        &self,
        post_ids: &[Uuid],
    ) -> Result<Vec<CommentEntity>, error::SystemError>;
}
