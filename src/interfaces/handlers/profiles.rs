use actix_web::{
    http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType},
    web, HttpResponse, Responder,
};
use uuid::Uuid;

use crate::{
    entities::profile::{Profile, ProfileUpdate},
    AppState,
};

pub async fn create_profile(
    state: web::Data<AppState>,
    payload: web::Json<Profile>,
) -> impl Responder {
    match state.profile_handler.create_profile(payload.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_profiles(state: web::Data<AppState>) -> impl Responder {
    match state.profile_handler.list_profiles().await {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<Uuid>,
) -> impl Responder {
    match state.profile_handler.get_profile(profile_id.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<Uuid>,
    payload: web::Json<ProfileUpdate>,
) -> impl Responder {
    match state
        .profile_handler
        .update_profile(profile_id.into_inner(), payload.into_inner())
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<Uuid>,
) -> impl Responder {
    match state.profile_handler.delete_profile(profile_id.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}

/// Serves the profile rendered as an HTML page.
pub async fn view_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<Uuid>,
) -> impl Responder {
    match state.profile_handler.view_profile(profile_id.into_inner()).await {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => e.to_http_response(),
    }
}

/// Streams the profile rendered as a PDF attachment.
pub async fn download_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<Uuid>,
) -> impl Responder {
    match state.profile_handler.download_profile(profile_id.into_inner()).await {
        Ok(download) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(download.filename)],
            })
            .body(download.bytes),
        Err(e) => e.to_http_response(),
    }
}
