use crate::api::error::ApiError;
use crate::api::server::AppState;
use actix_web::{
    web::{self, get, Data},
    HttpResponse, Scope,
};

async fn list_states(app_state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let states = app_state.store_context.state_store.list()?;
    Ok(HttpResponse::Ok().json(states))
}

async fn get_state(
    state_id: web::Path<i64>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .state_store
        .get(state_id.into_inner())?
    {
        Some(state) => Ok(HttpResponse::Ok().json(state)),
        None => Err(ApiError::NotFound("State not found")),
    }
}

async fn get_state_stats(
    state_id: web::Path<i64>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let stats = app_state
        .store_context
        .state_store
        .stats(state_id.into_inner())?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn states_routes() -> Scope {
    web::scope("/states")
        .route("", get().to(list_states))
        .route("/{state_id}", get().to(get_state))
        .route("/{state_id}/stats", get().to(get_state_stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::server::configure_routes;
    use crate::api::tests::helper::{create_test_app_state, GOA, KERALA};
    use actix_web::http::StatusCode;
    use actix_web::middleware::{NormalizePath, TrailingSlash};
    use actix_web::test;
    use actix_web::App;
    use serde_json::json;

    #[actix_web::test]
    async fn test_list_states() {
        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state())
                .wrap(NormalizePath::new(TrailingSlash::Trim))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/states/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            json!([
                {"stateId": 1, "stateName": "Kerala", "population": 34_630_000},
                {"stateId": 2, "stateName": "Goa", "population": 1_458_545}
            ])
        );
    }

    #[actix_web::test]
    async fn test_get_state() {
        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state())
                .wrap(NormalizePath::new(TrailingSlash::Trim))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/states/{GOA}/"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["stateName"], "Goa");

        let req = test::TestRequest::get().uri("/states/36/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"State not found");
    }

    #[actix_web::test]
    async fn test_state_stats() {
        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state())
                .wrap(NormalizePath::new(TrailingSlash::Trim))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/states/{KERALA}/stats/"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            json!({"totalCases": 150, "totalCured": 80, "totalActive": 55, "totalDeaths": 15})
        );

        let req = test::TestRequest::get()
            .uri(&format!("/states/{GOA}/stats/"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["totalCases"], 0);
        assert_eq!(json["totalDeaths"], 0);
    }
}
