use actix_web::{delete, get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        player::{
            model::{AddPlayerModel, PlayerResponse},
            repository_pg::PlayerRepositoryPg,
            service::RosterService,
        },
        team::repository_pg::TeamRepositoryPg,
    },
    utils::ValidatedJson,
};

pub type RosterSvc = RosterService<PlayerRepositoryPg, TeamRepositoryPg>;

#[post("")]
pub async fn add_player(
    roster_service: web::Data<RosterSvc>,
    body: ValidatedJson<AddPlayerModel>,
    req: HttpRequest,
) -> Result<success::Success<PlayerResponse>, error::Error> {
    let caller = get_claims(&req)?.sub;
    let player = roster_service.add_player(caller, body.0).await?;
    Ok(success::Success::created(Some(player)).message("Player added successfully"))
}

#[delete("/{id}")]
pub async fn remove_player(
    roster_service: web::Data<RosterSvc>,
    player_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let caller = get_claims(&req)?.sub;
    roster_service.remove_player(caller, *player_id).await?;
    Ok(success::Success::no_content())
}

#[get("/{team_id}/players")]
pub async fn team_roster(
    roster_service: web::Data<RosterSvc>,
    team_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<PlayerResponse>>, error::Error> {
    let players = roster_service.roster(*team_id).await?;
    Ok(success::Success::ok(Some(players)).message("Roster retrieved successfully"))
}
