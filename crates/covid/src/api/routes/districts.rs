use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::models::district::DistrictInput;
use actix_web::{
    web::{self, delete, get, post, put, Data},
    HttpResponse, Scope,
};
use log::{debug, info};

const DISTRICT_NOT_FOUND: &str = "District not found";

async fn create_district(
    body: web::Json<DistrictInput>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let district_id = app_state.store_context.district_store.create(&body)?;
    info!(
        "Added district {} ({district_id})",
        body.district_name.as_deref().unwrap_or("<unnamed>")
    );
    Ok(HttpResponse::Ok().body("District Successfully Added"))
}

async fn get_district(
    district_id: web::Path<i64>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .district_store
        .get(district_id.into_inner())?
    {
        Some(district) => Ok(HttpResponse::Ok().json(district)),
        None => Err(ApiError::NotFound(DISTRICT_NOT_FOUND)),
    }
}

async fn update_district(
    district_id: web::Path<i64>,
    body: web::Json<DistrictInput>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let district_id = district_id.into_inner();
    let updated = app_state
        .store_context
        .district_store
        .replace(district_id, &body)?;
    if updated == 0 {
        debug!("Update matched no district with id {district_id}");
    }
    Ok(HttpResponse::Ok().body("District Details Updated"))
}

async fn delete_district(
    district_id: web::Path<i64>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let district_id = district_id.into_inner();
    let removed = app_state.store_context.district_store.delete(district_id)?;
    if removed == 0 {
        debug!("Delete matched no district with id {district_id}");
    }
    Ok(HttpResponse::Ok().body("District Removed"))
}

async fn get_district_details(
    district_id: web::Path<i64>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .state_store
        .name_for_district(district_id.into_inner())?
    {
        Some(state_name) => Ok(HttpResponse::Ok().json(state_name)),
        None => Err(ApiError::NotFound(DISTRICT_NOT_FOUND)),
    }
}

pub fn districts_routes() -> Scope {
    web::scope("/districts")
        .route("", post().to(create_district))
        .route("/{district_id}", get().to(get_district))
        .route("/{district_id}", put().to(update_district))
        .route("/{district_id}", delete().to(delete_district))
        .route("/{district_id}/details", get().to(get_district_details))
}
