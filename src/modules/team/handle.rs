use actix_web::{get, patch, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    configs::RedisCache,
    middlewares::get_claims,
    modules::{
        player::repository_pg::PlayerRepositoryPg,
        team::{
            model::{
                RegisterModel, RegisterResponse, SearchQuery, SignInModel, SignInResponse,
                TeamResponse, TeamSummary, UpdateTeamModel,
            },
            repository_pg::TeamRepositoryPg,
            service::TeamService,
        },
    },
    utils::{ValidatedJson, ValidatedQuery},
};

pub type TeamSvc = TeamService<TeamRepositoryPg, PlayerRepositoryPg, RedisCache>;

#[post("/register")]
pub async fn register(
    team_service: web::Data<TeamSvc>,
    body: ValidatedJson<RegisterModel>,
) -> Result<success::Success<RegisterResponse>, error::Error> {
    let team_id = team_service.register(body.0).await?;
    Ok(success::Success::created(Some(RegisterResponse { id: team_id }))
        .message("Team registered successfully"))
}

#[post("/login")]
pub async fn sign_in(
    team_service: web::Data<TeamSvc>,
    body: ValidatedJson<SignInModel>,
) -> Result<success::Success<SignInResponse>, error::Error> {
    let (access_token, expires_in) = team_service.sign_in(body.0).await?;
    Ok(success::Success::ok(Some(SignInResponse { access_token, expires_in }))
        .message("Signin successful"))
}

#[get("")]
pub async fn get_profile(
    team_service: web::Data<TeamSvc>,
    req: HttpRequest,
) -> Result<success::Success<TeamResponse>, error::Error> {
    let id = get_claims(&req)?.sub;
    let team = team_service.get_own_profile(id).await?;
    Ok(success::Success::ok(Some(team)).message("Profile retrieved successfully"))
}

#[patch("")]
pub async fn update_profile(
    team_service: web::Data<TeamSvc>,
    body: ValidatedJson<UpdateTeamModel>,
    req: HttpRequest,
) -> Result<success::Success<TeamResponse>, error::Error> {
    let id = get_claims(&req)?.sub;
    let team = team_service.update_profile(id, body.0).await?;
    Ok(success::Success::ok(Some(team)).message("Profile updated successfully"))
}

#[get("")]
pub async fn list_teams(
    team_service: web::Data<TeamSvc>,
) -> Result<success::Success<Vec<TeamResponse>>, error::Error> {
    let teams = team_service.list_teams().await?;
    Ok(success::Success::ok(Some(teams)).message("Teams retrieved successfully"))
}

#[get("/search")]
pub async fn search_teams(
    team_service: web::Data<TeamSvc>,
    query: ValidatedQuery<SearchQuery>,
) -> Result<success::Success<Vec<TeamSummary>>, error::Error> {
    let teams = team_service.search_teams(&query.0.q).await?;
    Ok(success::Success::ok(Some(teams)).message("Teams retrieved successfully"))
}

#[get("/{id:[0-9a-fA-F-]{36}}")]
pub async fn get_team(
    team_service: web::Data<TeamSvc>,
    team_id: web::Path<Uuid>,
) -> Result<success::Success<TeamResponse>, error::Error> {
    let team = team_service.get_team(team_id.into_inner()).await?;
    Ok(success::Success::ok(Some(team)).message("Team retrieved successfully"))
}
