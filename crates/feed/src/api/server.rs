use crate::api::routes::auth::auth_routes;
use crate::api::routes::tweets::tweets_routes;
use crate::api::routes::user::user_routes;
use crate::store::core::StoreContext;
use actix_web::middleware::{Compress, NormalizePath, TrailingSlash};
use actix_web::{middleware, web::Data, App, HttpServer};
use actix_web::{web, HttpResponse};
use anyhow::Error;
use log::{error, info};
use serde_json::json;
use shared::security::jwt_middleware::JwtAuth;
use shared::security::token::TokenSigner;
use shared::utils::signal::stop_server_on_cancel;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct AppState {
    pub store_context: Arc<StoreContext>,
    pub tokens: Arc<TokenSigner>,
}

async fn health(app_state: Data<AppState>) -> HttpResponse {
    match app_state.store_context.sqlite.ping() {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(e) => {
            error!("Health check failed: {e}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Storage unavailable"
            }))
        }
    }
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "error": "Resource not found"
    }))
}

/// Registers every route. Everything under `/user` and `/tweets` sits behind
/// the bearer-token gate.
pub fn configure_routes(cfg: &mut web::ServiceConfig, tokens: Arc<TokenSigner>) {
    cfg.route("/health", web::get().to(health));
    auth_routes(cfg);
    cfg.service(user_routes().wrap(JwtAuth::new(tokens.clone())))
        .service(tweets_routes().wrap(JwtAuth::new(tokens)));
}

pub async fn start_server(
    host: &str,
    port: u16,
    store_context: Arc<StoreContext>,
    tokens: Arc<TokenSigner>,
    cancellation_token: CancellationToken,
) -> Result<(), Error> {
    info!("Starting server at http://{host}:{port}");
    let app_state = Data::new(AppState {
        store_context,
        tokens,
    });

    let server = HttpServer::new(move || {
        let tokens = app_state.tokens.clone();
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(Compress::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .configure(move |cfg| configure_routes(cfg, tokens))
            .default_service(web::route().to(not_found))
    })
    .bind((host, port))?
    .run();

    tokio::spawn(stop_server_on_cancel(server.handle(), cancellation_token));
    server.await?;
    info!("Server stopped");
    Ok(())
}
