use crate::api::error::{ApiError, INVALID_REQUEST};
use crate::api::routes::resolve_caller;
use crate::api::server::AppState;
use crate::models::tweet::{LikesResponse, RepliesResponse};
use actix_web::{
    web::{self, delete, get, Data},
    HttpResponse, Scope,
};
use log::info;
use shared::security::jwt_middleware::AuthenticatedUser;

/// Fails with 401 unless the caller follows the tweet's author.
fn ensure_visible(app_state: &AppState, viewer_id: i64, tweet_id: i64) -> Result<(), ApiError> {
    if app_state
        .store_context
        .tweet_store
        .is_visible_to(viewer_id, tweet_id)?
    {
        Ok(())
    } else {
        Err(ApiError::Unauthorized(INVALID_REQUEST))
    }
}

async fn get_tweet(
    tweet_id: web::Path<i64>,
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = resolve_caller(&app_state, &caller)?;
    match app_state
        .store_context
        .tweet_store
        .visible_summary(user_id, tweet_id.into_inner())?
    {
        Some(summary) => Ok(HttpResponse::Ok().json(summary)),
        None => Err(ApiError::Unauthorized(INVALID_REQUEST)),
    }
}

async fn get_likes(
    tweet_id: web::Path<i64>,
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let tweet_id = tweet_id.into_inner();
    let user_id = resolve_caller(&app_state, &caller)?;
    ensure_visible(&app_state, user_id, tweet_id)?;

    let likes = app_state.store_context.tweet_store.likers(tweet_id)?;
    Ok(HttpResponse::Ok().json(LikesResponse { likes }))
}

async fn get_replies(
    tweet_id: web::Path<i64>,
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let tweet_id = tweet_id.into_inner();
    let user_id = resolve_caller(&app_state, &caller)?;
    ensure_visible(&app_state, user_id, tweet_id)?;

    let replies = app_state.store_context.tweet_store.replies(tweet_id)?;
    Ok(HttpResponse::Ok().json(RepliesResponse { replies }))
}

async fn delete_tweet(
    tweet_id: web::Path<i64>,
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let tweet_id = tweet_id.into_inner();
    let user_id = resolve_caller(&app_state, &caller)?;

    if !app_state
        .store_context
        .tweet_store
        .delete_owned(tweet_id, user_id)?
    {
        return Err(ApiError::Unauthorized(INVALID_REQUEST));
    }
    info!("{} removed tweet {tweet_id}", caller.username);
    Ok(HttpResponse::Ok().body("Tweet Removed"))
}

pub fn tweets_routes() -> Scope {
    web::scope("/tweets")
        .route("/{tweet_id}", get().to(get_tweet))
        .route("/{tweet_id}", delete().to(delete_tweet))
        .route("/{tweet_id}/likes", get().to(get_likes))
        .route("/{tweet_id}/replies", get().to(get_replies))
}
