use crate::api::routes::districts::districts_routes;
use crate::api::routes::states::states_routes;
use crate::store::core::StoreContext;
use actix_web::middleware::{Compress, NormalizePath, TrailingSlash};
use actix_web::{middleware, web::Data, App, HttpServer};
use actix_web::{web, HttpResponse};
use anyhow::Error;
use log::{error, info};
use serde_json::json;
use shared::utils::signal::stop_server_on_cancel;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct AppState {
    pub store_context: Arc<StoreContext>,
}

async fn health(app_state: Data<AppState>) -> HttpResponse {
    if let Err(e) = app_state.store_context.sqlite.ping() {
        error!("Health check failed: {e}");
        return HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": "Storage unavailable"
        }));
    }
    HttpResponse::Ok().json(json!({ "success": true }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "error": "Resource not found"
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(states_routes())
        .service(districts_routes());
}

pub async fn start_server(
    host: &str,
    port: u16,
    store_context: Arc<StoreContext>,
    cancellation_token: CancellationToken,
) -> Result<(), Error> {
    info!("Running on http://{host}:{port}/");
    let app_state = Data::new(AppState { store_context });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(Compress::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .configure(configure_routes)
            .default_service(web::route().to(not_found))
    })
    .bind((host, port))?
    .run();

    tokio::spawn(stop_server_on_cancel(server.handle(), cancellation_token));
    server.await?;
    info!("Server stopped");
    Ok(())
}
