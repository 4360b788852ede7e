use actix_web::web;

use crate::handlers::profiles;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profiles")
            .service(
                web::resource("")
                    .route(web::post().to(profiles::create_profile))
                    .route(web::get().to(profiles::list_profiles))
            )
            .service(
                web::resource("/{profile_id}")
                    .route(web::get().to(profiles::get_profile))
                    .route(web::put().to(profiles::update_profile))
                    .route(web::delete().to(profiles::delete_profile))
            )
            .service(
                web::resource("/{profile_id}/view")
                    .route(web::get().to(profiles::view_profile))
            )
            .service(
                web::resource("/{profile_id}/download")
                    .route(web::get().to(profiles::download_profile))
            )
    );
}
