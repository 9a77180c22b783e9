use uuid::Uuid;

use crate::api::error;
use crate::modules::scrim::model::{InsertScrim, ScrimRow};
use crate::modules::scrim::schema::{ScrimEntity, ScrimStatus};

#[async_trait::async_trait]
pub trait ScrimRepository {
    async fn create(&self, scrim: &InsertScrim) -> Result<ScrimEntity, error::SystemError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ScrimEntity>, error::SystemError>;

    /// Compare-and-set transition: only applies when the stored status is
    /// `expected`. Returns false when the precondition no longer holds.
    async fn transition_status(
        &self,
        id: &Uuid,
        expected: ScrimStatus,
        next: ScrimStatus,
    ) -> Result<bool, error::SystemError>;

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError>;

    /// Scrims where the team is either party, scheduled date descending.
    async fn list_for_team(&self, team_id: &Uuid) -> Result<Vec<ScrimRow>, error::SystemError>;
}
