use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::scrim::model::{InsertScrim, ProposeScrimModel, ScrimResponse};
use crate::modules::scrim::repository::ScrimRepository;
use crate::modules::scrim::schema::{ScrimEntity, ScrimStatus};
use crate::modules::team::repository::TeamRepository;

#[derive(Clone)]
pub struct ScrimService<S, T>
where
    S: ScrimRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    scrim_repo: Arc<S>,
    team_repo: Arc<T>,
}

impl<S, T> ScrimService<S, T>
where
    S: ScrimRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    pub fn with_dependencies(scrim_repo: Arc<S>, team_repo: Arc<T>) -> Self {
        ScrimService { scrim_repo, team_repo }
    }

    pub async fn propose(
        &self,
        proposer: Uuid,
        model: ProposeScrimModel,
    ) -> Result<ScrimEntity, error::SystemError> {
        if model.opponent_id == proposer {
            return Err(error::SystemError::bad_request(
                "Cannot propose a scrim against your own team",
            ));
        }

        if self.team_repo.find_by_id(&model.opponent_id).await?.is_none() {
            return Err(error::SystemError::not_found("Opponent team not found"));
        }

        let scrim = self
            .scrim_repo
            .create(&InsertScrim {
                proposing_team: proposer,
                opponent_team: model.opponent_id,
                scrim_datetime: model.scrim_datetime,
                game: model.game,
            })
            .await?;

        Ok(scrim)
    }

    /// Only the invited opponent may answer, and only while the scrim is
    /// still pending.
    pub async fn accept(&self, scrim_id: Uuid, caller: Uuid) -> Result<(), error::SystemError> {
        let scrim = self.load_for_answer(scrim_id, caller).await?;

        if scrim.status != ScrimStatus::Pending {
            return Err(error::SystemError::conflict("Scrim is no longer pending"));
        }

        let transitioned = self
            .scrim_repo
            .transition_status(&scrim_id, ScrimStatus::Pending, ScrimStatus::Confirmed)
            .await?;
        if !transitioned {
            // Lost a race with a concurrent answer.
            return Err(error::SystemError::conflict("Scrim is no longer pending"));
        }

        Ok(())
    }

    /// Declining removes the record outright; a later lookup sees nothing.
    pub async fn decline(&self, scrim_id: Uuid, caller: Uuid) -> Result<(), error::SystemError> {
        let scrim = self.load_for_answer(scrim_id, caller).await?;

        if scrim.status != ScrimStatus::Pending {
            return Err(error::SystemError::conflict("Scrim is no longer pending"));
        }

        self.scrim_repo.delete(&scrim_id).await?;
        Ok(())
    }

    pub async fn list_mine(&self, team_id: Uuid) -> Result<Vec<ScrimResponse>, error::SystemError> {
        let rows = self.scrim_repo.list_for_team(&team_id).await?;
        Ok(rows.into_iter().map(ScrimResponse::from).collect())
    }

    async fn load_for_answer(
        &self,
        scrim_id: Uuid,
        caller: Uuid,
    ) -> Result<ScrimEntity, error::SystemError> {
        let scrim = self
            .scrim_repo
            .find_by_id(&scrim_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Scrim not found"))?;

        if scrim.opponent_team != caller {
            return Err(error::SystemError::forbidden(
                "Only the invited team can answer this scrim",
            ));
        }

        Ok(scrim)
    }
}
