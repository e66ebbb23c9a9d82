use crate::security::token::TokenSigner;
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::{HeaderMap, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use log::debug;
use std::sync::Arc;

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid JWT Token";

/// Identity resolved from a verified bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized(INVALID_TOKEN_MESSAGE)),
        )
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = auth_str.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

pub struct JwtAuth {
    signer: Arc<TokenSigner>,
}

impl JwtAuth {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self { signer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = JwtAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthService {
            service,
            signer: self.signer.clone(),
        }))
    }
}

pub struct JwtAuthService<S> {
    service: S,
    signer: Arc<TokenSigner>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let verified = bearer_token(req.headers()).map(|token| self.signer.verify(token));

        match verified {
            Some(Ok(claims)) => {
                req.extensions_mut().insert(AuthenticatedUser {
                    username: claims.username,
                });
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                })
            }
            Some(Err(e)) => {
                debug!("Rejected bearer token for {}: {}", req.path(), e);
                Box::pin(async move { Err(ErrorUnauthorized(INVALID_TOKEN_MESSAGE)) })
            }
            None => {
                debug!("Missing or malformed authorization header for {}", req.path());
                Box::pin(async move { Err(ErrorUnauthorized(INVALID_TOKEN_MESSAGE)) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Utc;

    async fn test_handler(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    fn signer() -> Arc<TokenSigner> {
        Arc::new(TokenSigner::new("test-secret", 3600))
    }

    #[actix_web::test]
    async fn test_valid_token_exposes_username() {
        let signer = signer();
        let token = signer.issue("JoeBiden").unwrap();
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(signer.clone()))
                .route("/", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"JoeBiden");
    }

    #[actix_web::test]
    async fn test_invalid_token() {
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(signer()))
                .route("/", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", "Bearer wrong-token"))
            .to_request();

        let resp = app.call(req).await;
        assert!(resp.is_err());
        assert_eq!(resp.unwrap_err().to_string(), INVALID_TOKEN_MESSAGE);
    }

    #[actix_web::test]
    async fn test_expired_token() {
        let signer = signer();
        let token = signer
            .issue_at("JoeBiden", Utc::now().timestamp() - 7200)
            .unwrap();
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(signer.clone()))
                .route("/", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();

        let resp = app.call(req).await;
        let err = resp.unwrap_err();
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_missing_auth_header() {
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(signer()))
                .route("/", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();

        let resp = app.call(req).await;
        assert!(resp.is_err());
        assert_eq!(resp.unwrap_err().to_string(), INVALID_TOKEN_MESSAGE);
    }

    #[actix_web::test]
    async fn test_lowercase_bearer_accepted() {
        let signer = signer();
        let token = signer.issue("JoeBiden").unwrap();
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(signer.clone()))
                .route("/", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", format!("bearer {token}")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_malformed_auth_header() {
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(signer()))
                .route("/", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", "InvalidFormat"))
            .to_request();

        let resp = app.call(req).await;
        assert!(resp.is_err());
        assert_eq!(resp.unwrap_err().to_string(), INVALID_TOKEN_MESSAGE);
    }

    #[actix_web::test]
    async fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer abc.def".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(AUTHORIZATION, "Basic abc.def".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }
}
