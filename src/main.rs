use actix_cors::Cors;
use actix_web::{
    self,
    middleware::{from_fn, Logger},
    web, App, HttpServer,
};
use std::sync::Arc;

use scrimhub::{
    configs::{connect_database, RedisCache},
    middlewares::authentication,
    modules::{
        friend::{repository_pg::FriendRepositoryPg, service::FriendService},
        graph::service::GraphService,
        player::{repository_pg::PlayerRepositoryPg, service::RosterService},
        post::{repository_pg::PostRepositoryPg, service::FeedService},
        scrim::{repository_pg::ScrimRepositoryPg, service::ScrimService},
        team::{
            repository_pg::TeamRepositoryPg,
            service::{AuthConfig, TeamService},
        },
    },
    ENV,
};

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .map_err(|e| std::io::Error::other(format!("Migration error: {e}")))?;

    let redis_cache = RedisCache::new()
        .await
        .map_err(|_| std::io::Error::other("Redis connection error"))?;

    let team_repo = Arc::new(TeamRepositoryPg::new(db_pool.clone()));
    let player_repo = Arc::new(PlayerRepositoryPg::new(db_pool.clone()));
    let friend_repo = Arc::new(FriendRepositoryPg::new(db_pool.clone()));
    let post_repo = Arc::new(PostRepositoryPg::new(db_pool.clone()));
    let scrim_repo = Arc::new(ScrimRepositoryPg::new(db_pool.clone()));

    let auth_config = AuthConfig {
        jwt_secret: ENV.jwt_secret.as_bytes().to_vec(),
        token_ttl_secs: ENV.access_token_expiration,
    };

    let team_service = TeamService::with_dependencies(
        team_repo.clone(),
        player_repo.clone(),
        Arc::new(redis_cache),
        auth_config,
    );
    let roster_service = RosterService::with_dependencies(player_repo.clone(), team_repo.clone());
    let friend_service = FriendService::with_dependencies(friend_repo.clone(), team_repo.clone());
    let feed_service = FeedService::with_dependencies(post_repo.clone(), team_repo.clone());
    let scrim_service = ScrimService::with_dependencies(scrim_repo.clone(), team_repo.clone());
    let graph_service = GraphService::with_dependencies(friend_repo.clone(), team_repo.clone());

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(team_service.clone()))
            .app_data(web::Data::new(roster_service.clone()))
            .app_data(web::Data::new(friend_service.clone()))
            .app_data(web::Data::new(feed_service.clone()))
            .app_data(web::Data::new(scrim_service.clone()))
            .app_data(web::Data::new(graph_service.clone()))
            .service(health_check)
            .service(
                web::scope("/api")
                    .configure(scrimhub::modules::team::route::public_api_configure)
                    .configure(scrimhub::modules::team::route::public_teams_configure)
                    .service(
                        web::scope("")
                            .wrap(from_fn(authentication))
                            .configure(scrimhub::modules::team::route::configure)
                            .configure(scrimhub::modules::player::route::configure)
                            .configure(scrimhub::modules::friend::route::configure)
                            .configure(scrimhub::modules::post::route::configure)
                            .configure(scrimhub::modules::scrim::route::configure)
                            .configure(scrimhub::modules::graph::route::configure),
                    ),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
