use crate::modules::player::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/players").service(add_player).service(remove_player));
}
