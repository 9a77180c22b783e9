use actix_web::{get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        post::{
            model::{
                CommentResponse, CreateCommentModel, CreatePostModel, LikeResponse, PopularQuery,
                PostResponse,
            },
            repository_pg::PostRepositoryPg,
            service::FeedService,
        },
        team::repository_pg::TeamRepositoryPg,
    },
    utils::{ValidatedJson, ValidatedQuery},
};

pub type FeedSvc = FeedService<PostRepositoryPg, TeamRepositoryPg>;

#[post("")]
pub async fn create_post(
    feed_service: web::Data<FeedSvc>,
    body: ValidatedJson<CreatePostModel>,
    req: HttpRequest,
) -> Result<success::Success<PostResponse>, error::Error> {
    let author = get_claims(&req)?.sub;
    let post = feed_service.create_post(author, body.0).await?;
    Ok(success::Success::created(Some(post)).message("Post created successfully"))
}

#[get("")]
pub async fn list_feed(
    feed_service: web::Data<FeedSvc>,
) -> Result<success::Success<Vec<PostResponse>>, error::Error> {
    let posts = feed_service.feed().await?;
    Ok(success::Success::ok(Some(posts)).message("Feed retrieved successfully"))
}

#[get("/popular")]
pub async fn list_popular(
    feed_service: web::Data<FeedSvc>,
    query: ValidatedQuery<PopularQuery>,
) -> Result<success::Success<Vec<PostResponse>>, error::Error> {
    let posts = feed_service.popular(query.0.limit).await?;
    Ok(success::Success::ok(Some(posts)).message("Popular posts retrieved successfully"))
}

#[post("/{id}/like")]
pub async fn toggle_like(
    feed_service: web::Data<FeedSvc>,
    post_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<LikeResponse>, error::Error> {
    let team_id = get_claims(&req)?.sub;
    let like = feed_service.toggle_like(*post_id, team_id).await?;
    Ok(success::Success::ok(Some(like)).message("Like toggled successfully"))
}

#[post("/{id}/comments")]
pub async fn add_comment(
    feed_service: web::Data<FeedSvc>,
    post_id: web::Path<Uuid>,
    body: ValidatedJson<CreateCommentModel>,
    req: HttpRequest,
) -> Result<success::Success<CommentResponse>, error::Error> {
    let author = get_claims(&req)?.sub;
    let comment = feed_service.add_comment(*post_id, author, body.0).await?;
    Ok(success::Success::created(Some(comment)).message("Comment added successfully"))
}

#[get("/{team_id}/posts")]
pub async fn team_posts(
    feed_service: web::Data<FeedSvc>,
    team_id: web::Path<Uuid>,
) -> Result<success::Success<Vec<PostResponse>>, error::Error> {
    let posts = feed_service.posts_by(*team_id).await?;
    Ok(success::Success::ok(Some(posts)).message("Posts retrieved successfully"))
}
