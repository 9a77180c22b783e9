use actix_web::{get, web, HttpRequest};

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        friend::repository_pg::FriendRepositoryPg,
        graph::{model::Recommendation, service::GraphService},
        team::repository_pg::TeamRepositoryPg,
    },
};

pub type GraphSvc = GraphService<FriendRepositoryPg, TeamRepositoryPg>;

#[get("/similar")]
pub async fn similar_teams(
    graph_service: web::Data<GraphSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<Recommendation>>, error::Error> {
    let team_id = get_claims(&req)?.sub;
    let recommendations = graph_service.similar_teams(team_id).await?;
    Ok(success::Success::ok(Some(recommendations))
        .message("Recommendations retrieved successfully"))
}

#[get("/influential")]
pub async fn influential_teams(
    graph_service: web::Data<GraphSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<Recommendation>>, error::Error> {
    let team_id = get_claims(&req)?.sub;
    let recommendations = graph_service.influential_teams(team_id).await?;
    Ok(success::Success::ok(Some(recommendations))
        .message("Recommendations retrieved successfully"))
}
