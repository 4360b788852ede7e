use actix_web::web;

use crate::handlers::home::home;

mod profiles;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(system::config_routes)
            .configure(profiles::config_routes)
    );
}
