use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::player::model::PlayerResponse;
use crate::modules::team::schema::{Game, Socials, TeamEntity};

#[derive(Deserialize, Validate)]
pub struct RegisterModel {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    #[validate(length(min = 2, message = "Team name must be at least 2 characters long"))]
    pub team_name: String,
    #[validate(length(min = 2, max = 5, message = "Tag must be 2 to 5 characters long"))]
    pub tag: Option<String>,
    pub main_game: Option<Game>,
}

#[derive(Deserialize, Validate)]
pub struct SignInModel {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateTeamModel {
    #[validate(length(min = 2, message = "Team name must be at least 2 characters long"))]
    pub team_name: Option<String>,
    #[validate(length(min = 2, max = 5, message = "Tag must be 2 to 5 characters long"))]
    pub tag: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
    pub main_game: Option<Game>,
    pub socials: Option<Socials>,
}

#[derive(Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1, message = "Search query cannot be empty"))]
    pub q: String,
}

pub struct InsertTeam {
    pub email: String,
    pub hash_password: String,
    pub team_name: String,
    pub tag: Option<String>,
    pub main_game: Option<Game>,
}

pub struct UpdateTeam {
    pub team_name: Option<String>,
    pub tag: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
    pub main_game: Option<Game>,
    pub socials: Option<Socials>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
}

#[derive(Serialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Compact team projection used by search results, friend lists and
/// recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamSummary {
    pub id: Uuid,
    pub team_name: String,
    pub tag: Option<String>,
    pub main_game: Option<Game>,
}

impl From<TeamEntity> for TeamSummary {
    fn from(entity: TeamEntity) -> Self {
        TeamSummary {
            id: entity.id,
            team_name: entity.team_name,
            tag: entity.tag,
            main_game: entity.main_game,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub email: String,
    pub team_name: String,
    pub tag: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
    pub main_game: Option<Game>,
    pub socials: Option<Socials>,
    pub players: Vec<PlayerResponse>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl TeamResponse {
    pub fn from_entity(entity: TeamEntity, players: Vec<PlayerResponse>) -> Self {
        TeamResponse {
            id: entity.id,
            email: entity.email,
            team_name: entity.team_name,
            tag: entity.tag,
            bio: entity.bio,
            logo_url: entity.logo_url,
            main_game: entity.main_game,
            socials: entity.socials.map(|s| s.0),
            players,
            created_at: entity.created_at,
        }
    }
}
