use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::post::model::{
    CommentResponse, CreateCommentModel, CreatePostModel, FeedRow, InsertComment, InsertPost,
    LikeResponse, PostAuthor, PostResponse,
};
use crate::modules::post::repository::PostRepository;
use crate::modules::team::repository::TeamRepository;

#[derive(Clone)]
pub struct FeedService<P, T>
where
    P: PostRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    post_repo: Arc<P>,
    team_repo: Arc<T>,
}

impl<P, T> FeedService<P, T>
where
    P: PostRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    pub fn with_dependencies(post_repo: Arc<P>, team_repo: Arc<T>) -> Self {
        FeedService { post_repo, team_repo }
    }

    pub async fn create_post(
        &self,
        author_id: Uuid,
        model: CreatePostModel,
    ) -> Result<PostResponse, error::SystemError> {
        let author = self
            .team_repo
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Account no longer exists"))?;

        let post = self
            .post_repo
            .create(&InsertPost { author_id, content: model.content })
            .await?;

        Ok(PostResponse {
            id: post.id,
            content: post.content,
            created_at: post.created_at,
            author: PostAuthor { id: author.id, team_name: author.team_name, tag: author.tag },
            likes_count: 0,
            comments: Vec::new(),
        })
    }

    pub async fn toggle_like(
        &self,
        post_id: Uuid,
        team_id: Uuid,
    ) -> Result<LikeResponse, error::SystemError> {
        if self.post_repo.find_by_id(&post_id).await?.is_none() {
            return Err(error::SystemError::not_found("Post not found"));
        }

        let (liked, likes_count) = self.post_repo.toggle_like(&post_id, &team_id).await?;
        Ok(LikeResponse { liked, likes_count })
    }

    /// The author snapshot is frozen into the comment; renaming the team
    /// later leaves historical comments untouched.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        model: CreateCommentModel,
    ) -> Result<CommentResponse, error::SystemError> {
        if self.post_repo.find_by_id(&post_id).await?.is_none() {
            return Err(error::SystemError::not_found("Post not found"));
        }

        let author = self
            .team_repo
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Account no longer exists"))?;

        let comment = self
            .post_repo
            .insert_comment(&InsertComment {
                post_id,
                author: PostAuthor {
                    id: author.id,
                    team_name: author.team_name,
                    tag: author.tag,
                },
                content: model.content,
            })
            .await?;

        Ok(CommentResponse::from(comment))
    }

    pub async fn feed(&self) -> Result<Vec<PostResponse>, error::SystemError> {
        let rows = self.post_repo.list_feed().await?;
        self.attach_comments(rows).await
    }

    pub async fn posts_by(&self, team_id: Uuid) -> Result<Vec<PostResponse>, error::SystemError> {
        if self.team_repo.find_by_id(&team_id).await?.is_none() {
            return Err(error::SystemError::not_found("Team not found"));
        }

        let rows = self.post_repo.list_by_author(&team_id).await?;
        self.attach_comments(rows).await
    }

    pub async fn popular(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<PostResponse>, error::SystemError> {
        let rows = self.post_repo.list_popular(limit.unwrap_or(5)).await?;
        self.attach_comments(rows).await
    }

    async fn attach_comments(
        &self,
        rows: Vec<FeedRow>,
    ) -> Result<Vec<PostResponse>, error::SystemError> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

        let mut comments: HashMap<Uuid, Vec<CommentResponse>> = HashMap::new();
        for comment in self.post_repo.comments_for(&ids).await? {
            comments.entry(comment.post_id).or_default().push(CommentResponse::from(comment));
        }

        Ok(rows
            .into_iter()
            .map(|row| PostResponse {
                comments: comments.remove(&row.id).unwrap_or_default(),
                id: row.id,
                content: row.content,
                created_at: row.created_at,
                author: PostAuthor {
                    id: row.author_id,
                    team_name: row.author_name,
                    tag: row.author_tag,
                },
                likes_count: row.likes_count,
            })
            .collect())
    }
}
