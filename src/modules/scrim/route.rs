use crate::modules::scrim::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/scrims")
            .service(list_my_scrims)
            .service(propose_scrim)
            .service(accept_scrim)
            .service(decline_scrim),
    );
}
