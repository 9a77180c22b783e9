use uuid::Uuid;

use crate::{
    api::error,
    modules::post::{
        model::{FeedRow, InsertComment, InsertPost},
        repository::PostRepository,
        schema::{CommentEntity, PostEntity},
    },
    utils::new_uuid,
};

const FEED_COLUMNS: &str = r#"
    p.id,
    p.author_id,
    p.content,
    p.created_at,
    t.team_name AS author_name,
    t.tag AS author_tag,
    (SELECT count(*) FROM post_likes pl WHERE pl.post_id = p.id) AS likes_count
"#;

#[derive(Clone)]
pub struct PostRepositoryPg {
    pool: sqlx::PgPool,
}

impl PostRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PostRepository for PostRepositoryPg {
    async fn create(&self, post: &InsertPost) -> Result<PostEntity, error::SystemError> {
        let created = sqlx::query_as::<_, PostEntity>(
            r#"
            INSERT INTO posts (id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(new_uuid())
        .bind(post.author_id)
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PostEntity>, error::SystemError> {
        let post = sqlx::query_as::<_, PostEntity>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn list_feed(&self) -> Result<Vec<FeedRow>, error::SystemError> {
        let rows = sqlx::query_as::<_, FeedRow>(&format!(
            r#"
            SELECT {FEED_COLUMNS}
            FROM posts p
            JOIN teams t ON t.id = p.author_id
            ORDER BY p.created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_author(&self, team_id: &Uuid) -> Result<Vec<FeedRow>, error::SystemError> {
        let rows = sqlx::query_as::<_, FeedRow>(&format!(
            r#"
            SELECT {FEED_COLUMNS}
            FROM posts p
            JOIN teams t ON t.id = p.author_id
            WHERE p.author_id = $1
            ORDER BY p.created_at DESC
            "#
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_popular(&self, limit: i64) -> Result<Vec<FeedRow>, error::SystemError> {
        let rows = sqlx::query_as::<_, FeedRow>(&format!(
            r#"
            SELECT {FEED_COLUMNS}
            FROM posts p
            JOIN teams t ON t.id = p.author_id
            ORDER BY likes_count DESC, p.created_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn toggle_like(
        &self,
        post_id: &Uuid,
        team_id: &Uuid,
    ) -> Result<(bool, i64), error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND team_id = $2")
            .bind(post_id)
            .bind(team_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let liked = removed == 0;
        if liked {
            sqlx::query(
                "INSERT INTO post_likes (post_id, team_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(post_id)
            .bind(team_id)
            .execute(&mut *tx)
            .await?;
        }

        let (likes_count,): (i64,) =
            sqlx::query_as("SELECT count(*) FROM post_likes WHERE post_id = $1")
                .bind(post_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok((liked, likes_count))
    }

    async fn insert_comment(
        &self,
        comment: &InsertComment,
    ) -> Result<CommentEntity, error::SystemError> {
        let created = sqlx::query_as::<_, CommentEntity>(
            r#"
            INSERT INTO post_comments (id, post_id, author_id, author_name, author_tag, content)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new_uuid())
        .bind(comment.post_id)
        .bind(comment.author.id)
        .bind(&comment.author.team_name)
        .bind(&comment.author.tag)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn comments_for(
        &self,
        post_ids: &[Uuid],
    ) -> Result<Vec<CommentEntity>, error::SystemError> {
        let comments = sqlx::query_as::<_, CommentEntity>(
            "SELECT * FROM post_comments WHERE post_id = ANY($1) ORDER BY created_at",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }
}
