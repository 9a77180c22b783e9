use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::configs::Cache;
use crate::modules::player::model::PlayerResponse;
use crate::modules::player::repository::PlayerRepository;
use crate::modules::team::model::{
    InsertTeam, RegisterModel, SignInModel, TeamResponse, TeamSummary, UpdateTeam, UpdateTeamModel,
};
use crate::modules::team::repository::TeamRepository;
use crate::utils::{hash_password, verify_password, Claims};

const PROFILE_CACHE_TTL_SECS: u64 = 3600;

/// Signing material handed to the service at startup so the service itself
/// never reads process environment.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Vec<u8>,
    pub token_ttl_secs: u64,
}

#[derive(Clone)]
pub struct TeamService<R, P, C>
where
    R: TeamRepository + Send + Sync,
    P: PlayerRepository + Send + Sync,
    C: Cache,
{
    team_repo: Arc<R>,
    player_repo: Arc<P>,
    cache: Arc<C>,
    auth: AuthConfig,
}

impl<R, P, C> TeamService<R, P, C>
where
    R: TeamRepository + Send + Sync,
    P: PlayerRepository + Send + Sync,
    C: Cache,
{
    pub fn with_dependencies(
        team_repo: Arc<R>,
        player_repo: Arc<P>,
        cache: Arc<C>,
        auth: AuthConfig,
    ) -> Self {
        TeamService { team_repo, player_repo, cache, auth }
    }

    pub async fn register(&self, model: RegisterModel) -> Result<Uuid, error::SystemError> {
        if self.team_repo.find_by_email(&model.email).await?.is_some() {
            return Err(error::SystemError::conflict("Email already registered"));
        }

        let hash_password = hash_password(&model.password)?;

        let new_team = InsertTeam {
            email: model.email,
            hash_password,
            team_name: model.team_name,
            tag: model.tag,
            main_game: model.main_game,
        };

        let team_id = self.team_repo.create(&new_team).await?;
        info!("Registered team {}", team_id);
        Ok(team_id)
    }

    /// Unknown email and bad password return the same message on purpose.
    pub async fn sign_in(&self, model: SignInModel) -> Result<(String, u64), error::SystemError> {
        let team = self
            .team_repo
            .find_by_email(&model.email)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Invalid email or password"))?;

        let valid = verify_password(&team.hash_password, &model.password)?;
        if !valid {
            return Err(error::SystemError::unauthorized("Invalid email or password"));
        }

        let access_token =
            Claims::new(&team.id, self.auth.token_ttl_secs).encode(&self.auth.jwt_secret)?;

        Ok((access_token, self.auth.token_ttl_secs))
    }

    pub async fn get_team(&self, id: Uuid) -> Result<TeamResponse, error::SystemError> {
        let key = format!("team:{}", id);
        if let Some(cached) = self.cache.get(&key).await? {
            info!("Team {} served from cache", id);
            return Ok(serde_json::from_str(&cached)?);
        }

        let team = self
            .team_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Team not found"))?;

        let players = self
            .player_repo
            .list_by_team(&id)
            .await?
            .into_iter()
            .map(PlayerResponse::from)
            .collect();

        let response = TeamResponse::from_entity(team, players);
        self.cache.set(&key, &serde_json::to_string(&response)?, PROFILE_CACHE_TTL_SECS).await?;
        Ok(response)
    }

    /// Profile of the authenticated team. A valid token whose subject has
    /// disappeared is an authentication failure, not a missing resource.
    pub async fn get_own_profile(&self, id: Uuid) -> Result<TeamResponse, error::SystemError> {
        match self.get_team(id).await {
            Err(error::SystemError::NotFound(_)) => {
                Err(error::SystemError::unauthorized("Account no longer exists"))
            }
            other => other,
        }
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        model: UpdateTeamModel,
    ) -> Result<TeamResponse, error::SystemError> {
        if model.team_name.is_none()
            && model.tag.is_none()
            && model.bio.is_none()
            && model.logo_url.is_none()
            && model.main_game.is_none()
            && model.socials.is_none()
        {
            return Err(error::SystemError::bad_request("No fields to update"));
        }

        let update = UpdateTeam {
            team_name: model.team_name,
            tag: model.tag,
            bio: model.bio,
            logo_url: model.logo_url,
            main_game: model.main_game,
            socials: model.socials,
        };

        let team = self.team_repo.update_profile(&id, &update).await?;

        self.cache.delete(&format!("team:{}", id)).await?;

        let players = self
            .player_repo
            .list_by_team(&id)
            .await?
            .into_iter()
            .map(PlayerResponse::from)
            .collect();
        Ok(TeamResponse::from_entity(team, players))
    }

    pub async fn list_teams(&self) -> Result<Vec<TeamResponse>, error::SystemError> {
        let teams = self.team_repo.list_all().await?;
        let ids: Vec<Uuid> = teams.iter().map(|t| t.id).collect();

        let mut rosters: HashMap<Uuid, Vec<PlayerResponse>> = HashMap::new();
        for player in self.player_repo.list_by_teams(&ids).await? {
            if let Some(team_id) = player.team_id {
                rosters.entry(team_id).or_default().push(PlayerResponse::from(player));
            }
        }

        Ok(teams
            .into_iter()
            .map(|team| {
                let players = rosters.remove(&team.id).unwrap_or_default();
                TeamResponse::from_entity(team, players)
            })
            .collect())
    }

    pub async fn search_teams(&self, query: &str) -> Result<Vec<TeamSummary>, error::SystemError> {
        self.team_repo.search(query, 20).await
    }
}
