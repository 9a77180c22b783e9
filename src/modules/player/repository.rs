use uuid::Uuid;

use crate::api::error;
use crate::modules::player::model::InsertPlayer;
use crate::modules::player::schema::PlayerEntity;

#[async_trait::async_trait]
pub trait PlayerRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PlayerEntity>, error::SystemError>;
    async fn create(&self, player: &InsertPlayer) -> Result<PlayerEntity, error::SystemError>;
    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError>;
    async fn list_by_team(&self, team_id: &Uuid)
        -> Result<Vec<PlayerEntity>, error::SystemError>;
    async fn list_by_teams(
        &self,
        team_ids: &[Uuid],
    ) -> Result<Vec<PlayerEntity>, error::SystemError>;
}
