use crate::modules::post::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/posts")
            .service(list_popular)
            .service(list_feed)
            .service(create_post)
            .service(toggle_like)
            .service(add_comment),
    );
}
