use crate::modules::graph::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/recommendations").service(similar_teams).service(influential_teams));
}
