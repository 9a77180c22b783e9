use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::player::model::{AddPlayerModel, InsertPlayer, PlayerResponse};
use crate::modules::player::repository::PlayerRepository;
use crate::modules::team::repository::TeamRepository;

#[derive(Clone)]
pub struct RosterService<P, T>
where
    P: PlayerRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    player_repo: Arc<P>,
    team_repo: Arc<T>,
}

impl<P, T> RosterService<P, T>
where
    P: PlayerRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    pub fn with_dependencies(player_repo: Arc<P>, team_repo: Arc<T>) -> Self {
        RosterService { player_repo, team_repo }
    }

    /// Role strings are checked against the vocabulary of the team's main
    /// game at creation time only; a later change of main game does not
    /// re-validate existing players.
    pub async fn add_player(
        &self,
        caller: Uuid,
        model: AddPlayerModel,
    ) -> Result<PlayerResponse, error::SystemError> {
        let team = self
            .team_repo
            .find_by_id(&caller)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Account no longer exists"))?;

        if let (Some(role), Some(game)) = (&model.role, team.main_game) {
            if !game.allowed_roles().contains(&role.as_str()) {
                return Err(error::SystemError::bad_request(format!(
                    "Role '{}' is not a valid role for {}",
                    role, game
                )));
            }
        }

        let insert = InsertPlayer {
            nickname: model.nickname,
            full_name: model.full_name,
            role: model.role,
            team_id: team.id,
        };

        let player = self.player_repo.create(&insert).await?;
        Ok(PlayerResponse::from(player))
    }

    pub async fn remove_player(
        &self,
        caller: Uuid,
        player_id: Uuid,
    ) -> Result<(), error::SystemError> {
        let player = self
            .player_repo
            .find_by_id(&player_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Player not found"))?;

        if player.team_id != Some(caller) {
            return Err(error::SystemError::forbidden(
                "You are not allowed to remove players from another team",
            ));
        }

        self.player_repo.delete(&player_id).await?;
        Ok(())
    }

    pub async fn roster(&self, team_id: Uuid) -> Result<Vec<PlayerResponse>, error::SystemError> {
        if self.team_repo.find_by_id(&team_id).await?.is_none() {
            return Err(error::SystemError::not_found("Team not found"));
        }

        let players = self.player_repo.list_by_team(&team_id).await?;
        Ok(players.into_iter().map(PlayerResponse::from).collect())
    }
}
