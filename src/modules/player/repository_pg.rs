use uuid::Uuid;

use crate::{
    api::error,
    modules::player::{model::InsertPlayer, repository::PlayerRepository, schema::PlayerEntity},
    utils::new_uuid,
};

#[derive(Clone)]
pub struct PlayerRepositoryPg {
    pool: sqlx::PgPool,
}

impl PlayerRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PlayerRepository for PlayerRepositoryPg {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PlayerEntity>, error::SystemError> {
        let player = sqlx::query_as::<_, PlayerEntity>("SELECT * FROM players WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(player)
    }

    async fn create(&self, player: &InsertPlayer) -> Result<PlayerEntity, error::SystemError> {
        let created = sqlx::query_as::<_, PlayerEntity>(
            r#"
            INSERT INTO players (id, nickname, full_name, role, team_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new_uuid())
        .bind(&player.nickname)
        .bind(&player.full_name)
        .bind(&player.role)
        .bind(player.team_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }

    async fn list_by_team(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<PlayerEntity>, error::SystemError> {
        let players = sqlx::query_as::<_, PlayerEntity>(
            "SELECT * FROM players WHERE team_id = $1 ORDER BY nickname",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(players)
    }

    async fn list_by_teams(
        &self,
        team_ids: &[Uuid],
    ) -> Result<Vec<PlayerEntity>, error::SystemError> {
        let players = sqlx::query_as::<_, PlayerEntity>(
            "SELECT * FROM players WHERE team_id = ANY($1) ORDER BY nickname",
        )
        .bind(team_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(players)
    }
}
