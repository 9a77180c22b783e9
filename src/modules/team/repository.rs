use uuid::Uuid;

use crate::api::error;
use crate::modules::team::model::{InsertTeam, TeamSummary, UpdateTeam};
use crate::modules::team::schema::TeamEntity;

#[async_trait::async_trait]
pub trait TeamRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<TeamEntity>, error::SystemError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<TeamEntity>, error::SystemError>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<TeamEntity>, error::SystemError>;
    async fn create(&self, team: &InsertTeam) -> Result<Uuid, error::SystemError>;
    async fn update_profile(
        &self,
        id: &Uuid,
        update: &UpdateTeam,
    ) -> Result<TeamEntity, error::SystemError>;
    async fn list_all(&self) -> Result<Vec<TeamEntity>, error::SystemError>;

    /// Case-insensitive partial match on team name or tag.
    async fn search(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<TeamSummary>, error::SystemError>;
}
