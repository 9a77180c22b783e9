use actix_web::{get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        scrim::{
            model::{ProposeScrimModel, ScrimResponse},
            repository_pg::ScrimRepositoryPg,
            schema::ScrimEntity,
            service::ScrimService,
        },
        team::repository_pg::TeamRepositoryPg,
    },
    utils::ValidatedJson,
};

pub type ScrimSvc = ScrimService<ScrimRepositoryPg, TeamRepositoryPg>;

#[post("")]
pub async fn propose_scrim(
    scrim_service: web::Data<ScrimSvc>,
    body: ValidatedJson<ProposeScrimModel>,
    req: HttpRequest,
) -> Result<success::Success<ScrimEntity>, error::Error> {
    let proposer = get_claims(&req)?.sub;
    let scrim = scrim_service.propose(proposer, body.0).await?;
    Ok(success::Success::created(Some(scrim)).message("Scrim proposed successfully"))
}

#[get("/me")]
pub async fn list_my_scrims(
    scrim_service: web::Data<ScrimSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<ScrimResponse>>, error::Error> {
    let team_id = get_claims(&req)?.sub;
    let scrims = scrim_service.list_mine(team_id).await?;
    Ok(success::Success::ok(Some(scrims)).message("Scrims retrieved successfully"))
}

#[post("/{id}/accept")]
pub async fn accept_scrim(
    scrim_service: web::Data<ScrimSvc>,
    scrim_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let caller = get_claims(&req)?.sub;
    scrim_service.accept(*scrim_id, caller).await?;
    Ok(success::Success::ok(None).message("Scrim confirmed"))
}

#[post("/{id}/decline")]
pub async fn decline_scrim(
    scrim_service: web::Data<ScrimSvc>,
    scrim_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let caller = get_claims(&req)?.sub;
    scrim_service.decline(*scrim_id, caller).await?;
    Ok(success::Success::no_content())
}
