use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        friend::{
            model::{FriendRequestRow, FriendRequestView},
            repository::{FriendRepo, FriendRequestRepository, FriendshipRepository},
            schema::{ordered_pair, FriendEntity, FriendRequestEntity},
        },
        team::model::TeamSummary,
    },
    utils::new_uuid,
};

#[derive(Clone)]
pub struct FriendRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendshipRepository for FriendRepositoryPg {
    async fn find_friendship(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        let (team_a, team_b) = ordered_pair(*team_id_a, *team_id_b);

        let friendship = sqlx::query_as::<_, FriendEntity>(
            "SELECT * FROM friends WHERE team_a = $1 AND team_b = $2",
        )
        .bind(team_a)
        .bind(team_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(friendship)
    }

    async fn find_friends(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<TeamSummary>, error::SystemError> {
        let friends = sqlx::query_as::<_, TeamSummary>(
            r#"
            SELECT
                t.id,
                t.team_name,
                t.tag,
                t.main_game
            FROM friends f
            JOIN teams t
                ON t.id = CASE
                    WHEN f.team_a = $1 THEN f.team_b
                    ELSE f.team_a
                END
            WHERE f.team_a = $1
               OR f.team_b = $1
            ORDER BY t.team_name
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(friends)
    }

    async fn delete_friendship(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let (team_a, team_b) = ordered_pair(*team_id_a, *team_id_b);

        let rows = sqlx::query("DELETE FROM friends WHERE team_a = $1 AND team_b = $2")
            .bind(team_a)
            .bind(team_b)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }

    async fn friend_edges(&self) -> Result<Vec<(Uuid, Uuid)>, error::SystemError> {
        let edges = sqlx::query_as::<_, (Uuid, Uuid)>("SELECT team_a, team_b FROM friends")
            .fetch_all(&self.pool)
            .await?;
        Ok(edges)
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for FriendRepositoryPg {
    async fn find_request(
        &self,
        from: &Uuid,
        to: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            "SELECT * FROM friend_requests WHERE from_team_id = $1 AND to_team_id = $2",
        )
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    async fn find_request_between(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT *
            FROM friend_requests
            WHERE
                (from_team_id = $1 AND to_team_id = $2)
             OR (from_team_id = $2 AND to_team_id = $1)
            "#,
        )
        .bind(team_id_a)
        .bind(team_id_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    async fn create_request(
        &self,
        from: &Uuid,
        to: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            INSERT INTO friend_requests (id, from_team_id, to_team_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(new_uuid())
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    async fn delete_request(&self, request_id: &Uuid) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM friend_requests WHERE id = $1")
            .bind(request_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn incoming_requests(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<FriendRequestView>, error::SystemError> {
        let rows = sqlx::query_as::<_, FriendRequestRow>(
            r#"
            SELECT
                t.id AS team_id,
                t.team_name,
                t.tag,
                t.main_game,
                fr.created_at
            FROM friend_requests fr
            JOIN teams t
                ON fr.from_team_id = t.id
            WHERE fr.to_team_id = $1
            ORDER BY fr.created_at DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FriendRequestView::from).collect())
    }

    async fn outgoing_requests(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<FriendRequestView>, error::SystemError> {
        let rows = sqlx::query_as::<_, FriendRequestRow>(
            r#"
            SELECT
                t.id AS team_id,
                t.team_name,
                t.tag,
                t.main_game,
                fr.created_at
            FROM friend_requests fr
            JOIN teams t
                ON fr.to_team_id = t.id
            WHERE fr.from_team_id = $1
            ORDER BY fr.created_at DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FriendRequestView::from).collect())
    }
}

#[async_trait::async_trait]
impl FriendRepo for FriendRepositoryPg {
    async fn accept_request_atomic(
        &self,
        accepting: &Uuid,
        requester: &Uuid,
    ) -> Result<(), error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let request = sqlx::query_as::<_, FriendRequestEntity>(
            "SELECT * FROM friend_requests WHERE from_team_id = $1 AND to_team_id = $2 FOR UPDATE",
        )
        .bind(requester)
        .bind(accepting)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| error::SystemError::not_found("Friend request not found"))?;

        let (team_a, team_b) = ordered_pair(request.from_team_id, request.to_team_id);

        sqlx::query("INSERT INTO friends (team_a, team_b) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(team_a)
            .bind(team_b)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM friend_requests WHERE id = $1")
            .bind(request.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
