use crate::modules::team::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn public_api_configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/auth").service(register).service(sign_in));
}

/// All public team-viewing routes live in one scope; sibling modules
/// contribute their per-team sub-resources here so no other scope claims
/// the /teams prefix.
pub fn public_teams_configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/teams")
            .service(search_teams)
            .service(list_teams)
            .service(crate::modules::player::handle::team_roster)
            .service(crate::modules::friend::handle::team_friends)
            .service(crate::modules::post::handle::team_posts)
            .service(get_team),
    );
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/profile").service(get_profile).service(update_profile));
}
