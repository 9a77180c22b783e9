use actix_web::{delete, get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        friend::{
            model::FriendRequestLists, repository_pg::FriendRepositoryPg,
            schema::FriendRequestEntity, service::FriendService,
        },
        team::{model::TeamSummary, repository_pg::TeamRepositoryPg},
    },
};

pub type FriendSvc = FriendService<FriendRepositoryPg, TeamRepositoryPg>;

#[post("/requests/{team_id}")]
pub async fn send_friend_request(
    friend_service: web::Data<FriendSvc>,
    team_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let sender = get_claims(&req)?.sub;
    let request = friend_service.send_request(sender, *team_id).await?;

    Ok(success::Success::created(Some(request)).message("Friend request sent successfully"))
}

#[post("/requests/{team_id}/accept")]
pub async fn accept_friend_request(
    friend_service: web::Data<FriendSvc>,
    team_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<TeamSummary>, error::Error> {
    let accepting = get_claims(&req)?.sub;
    let new_friend = friend_service.accept_request(accepting, *team_id).await?;

    Ok(success::Success::ok(Some(new_friend)).message("Friend request accepted successfully"))
}

#[post("/requests/{team_id}/decline")]
pub async fn decline_friend_request(
    friend_service: web::Data<FriendSvc>,
    team_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let accepting = get_claims(&req)?.sub;
    friend_service.decline_request(accepting, *team_id).await?;
    Ok(success::Success::no_content())
}

#[get("")]
pub async fn list_friends(
    friend_service: web::Data<FriendSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<TeamSummary>>, error::Error> {
    let team_id = get_claims(&req)?.sub;
    let friends = friend_service.get_friends(team_id).await?;

    Ok(success::Success::ok(Some(friends)).message("Friends retrieved successfully"))
}

#[get("/requests")]
pub async fn list_friend_requests(
    friend_service: web::Data<FriendSvc>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestLists>, error::Error> {
    let team_id = get_claims(&req)?.sub;
    let requests = friend_service.request_lists(team_id).await?;

    Ok(success::Success::ok(Some(requests)).message("Friend requests retrieved successfully"))
}

#[delete("/{team_id}")]
pub async fn remove_friend(
    friend_service: web::Data<FriendSvc>,
    team_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let caller = get_claims(&req)?.sub;
    friend_service.remove_friend(caller, *team_id).await?;
    Ok(success::Success::no_content())
}

#[get("/{team_id}/friends")]
pub async fn team_friends(
    friend_service: web::Data<FriendSvc>,
    team_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<TeamSummary>>, error::Error> {
    let friends = friend_service.friends_of(*team_id).await?;
    Ok(success::Success::ok(Some(friends)).message("Friends retrieved successfully"))
}
