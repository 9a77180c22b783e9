use uuid::Uuid;

use crate::{
    api::error,
    modules::scrim::{
        model::{InsertScrim, ScrimRow},
        repository::ScrimRepository,
        schema::{ScrimEntity, ScrimStatus},
    },
    utils::new_uuid,
};

#[derive(Clone)]
pub struct ScrimRepositoryPg {
    pool: sqlx::PgPool,
}

impl ScrimRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ScrimRepository for ScrimRepositoryPg {
    async fn create(&self, scrim: &InsertScrim) -> Result<ScrimEntity, error::SystemError> {
        let created = sqlx::query_as::<_, ScrimEntity>(
            r#"
            INSERT INTO scrims (id, proposing_team, opponent_team, scrim_datetime, game, status)
            VALUES ($1, $2, $3, $4, $5, 'pending')
            RETURNING *
            "#,
        )
        .bind(new_uuid())
        .bind(scrim.proposing_team)
        .bind(scrim.opponent_team)
        .bind(scrim.scrim_datetime)
        .bind(scrim.game)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ScrimEntity>, error::SystemError> {
        let scrim = sqlx::query_as::<_, ScrimEntity>("SELECT * FROM scrims WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(scrim)
    }

    async fn transition_status(
        &self,
        id: &Uuid,
        expected: ScrimStatus,
        next: ScrimStatus,
    ) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("UPDATE scrims SET status = $3 WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(expected)
            .bind(next)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("DELETE FROM scrims WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }

    async fn list_for_team(&self, team_id: &Uuid) -> Result<Vec<ScrimRow>, error::SystemError> {
        let scrims = sqlx::query_as::<_, ScrimRow>(
            r#"
            SELECT
                s.id,
                s.proposing_team,
                tp.team_name AS proposing_name,
                tp.tag AS proposing_tag,
                s.opponent_team,
                op.team_name AS opponent_name,
                op.tag AS opponent_tag,
                s.scrim_datetime,
                s.game,
                s.status,
                s.created_at
            FROM scrims s
            JOIN teams tp ON tp.id = s.proposing_team
            JOIN teams op ON op.id = s.opponent_team
            WHERE s.proposing_team = $1
               OR s.opponent_team = $1
            ORDER BY s.scrim_datetime DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(scrims)
    }
}
