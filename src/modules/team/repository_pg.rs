use uuid::Uuid;

use crate::{
    api::error,
    modules::team::{
        model::{InsertTeam, TeamSummary, UpdateTeam},
        repository::TeamRepository,
        schema::TeamEntity,
    },
    utils::new_uuid,
};

#[derive(Clone)]
pub struct TeamRepositoryPg {
    pool: sqlx::PgPool,
}

impl TeamRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TeamRepository for TeamRepositoryPg {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<TeamEntity>, error::SystemError> {
        let team = sqlx::query_as::<_, TeamEntity>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(team)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<TeamEntity>, error::SystemError> {
        let team =
            sqlx::query_as::<_, TeamEntity>("SELECT * FROM teams WHERE lower(email) = lower($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(team)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<TeamEntity>, error::SystemError> {
        let teams = sqlx::query_as::<_, TeamEntity>("SELECT * FROM teams WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(teams)
    }

    async fn create(&self, team: &InsertTeam) -> Result<Uuid, error::SystemError> {
        let id = new_uuid();
        sqlx::query(
            r#"
            INSERT INTO teams (id, email, hash_password, team_name, tag, main_game)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(&team.email)
        .bind(&team.hash_password)
        .bind(&team.team_name)
        .bind(&team.tag)
        .bind(team.main_game)
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_profile(
        &self,
        id: &Uuid,
        update: &UpdateTeam,
    ) -> Result<TeamEntity, error::SystemError> {
        let team = sqlx::query_as::<_, TeamEntity>(
            r#"
            UPDATE teams
            SET
                team_name = COALESCE($2, team_name),
                tag       = COALESCE($3, tag),
                bio       = COALESCE($4, bio),
                logo_url  = COALESCE($5, logo_url),
                main_game = COALESCE($6, main_game),
                socials   = COALESCE($7, socials)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.team_name)
        .bind(&update.tag)
        .bind(&update.bio)
        .bind(&update.logo_url)
        .bind(update.main_game)
        .bind(update.socials.as_ref().map(sqlx::types::Json))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| error::SystemError::not_found("Team not found"))?;

        Ok(team)
    }

    async fn list_all(&self) -> Result<Vec<TeamEntity>, error::SystemError> {
        let teams = sqlx::query_as::<_, TeamEntity>("SELECT * FROM teams ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(teams)
    }

    async fn search(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<TeamSummary>, error::SystemError> {
        let pattern = format!("%{}%", query.replace('%', "\\%").replace('_', "\\_"));
        let teams = sqlx::query_as::<_, TeamSummary>(
            r#"
            SELECT id, team_name, tag, main_game FROM teams
            WHERE lower(team_name) LIKE lower($1)
               OR lower(tag) LIKE lower($1)
            ORDER BY team_name
            LIMIT $2
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(teams)
    }
}
