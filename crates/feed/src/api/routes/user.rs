use crate::api::error::{ApiError, INVALID_USER};
use crate::api::routes::resolve_caller;
use crate::api::server::AppState;
use crate::models::tweet::CreateTweetRequest;
use actix_web::{
    web::{self, get, post, Data},
    HttpResponse, Scope,
};
use chrono::Utc;
use log::info;
use shared::security::jwt_middleware::AuthenticatedUser;

const FEED_LIMIT: i64 = 4;

async fn get_feed(
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = resolve_caller(&app_state, &caller)?;
    let feed = app_state
        .store_context
        .tweet_store
        .feed(user_id, FEED_LIMIT)?;
    Ok(HttpResponse::Ok().json(feed))
}

async fn get_following(
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = resolve_caller(&app_state, &caller)?;
    let names = app_state.store_context.follower_store.following(user_id)?;
    Ok(HttpResponse::Ok().json(names))
}

async fn get_followers(
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = resolve_caller(&app_state, &caller)?;
    let names = app_state.store_context.follower_store.followers(user_id)?;
    Ok(HttpResponse::Ok().json(names))
}

async fn get_own_tweets(
    caller: AuthenticatedUser,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = resolve_caller(&app_state, &caller)?;
    let tweets = app_state.store_context.tweet_store.tweets_by(user_id)?;
    Ok(HttpResponse::Ok().json(tweets))
}

async fn create_tweet(
    caller: AuthenticatedUser,
    body: web::Json<CreateTweetRequest>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let date_time = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let created = app_state.store_context.tweet_store.create_for(
        &caller.username,
        body.tweet.as_deref(),
        &date_time,
    )?;
    if !created {
        return Err(ApiError::BadRequest(INVALID_USER));
    }
    info!("{} posted a tweet", caller.username);
    Ok(HttpResponse::Ok().body("Created a Tweet"))
}

pub fn user_routes() -> Scope {
    web::scope("/user")
        .route("/tweets/feed", get().to(get_feed))
        .route("/following", get().to(get_following))
        .route("/followers", get().to(get_followers))
        .route("/tweets", get().to(get_own_tweets))
        .route("/tweets", post().to(create_tweet))
}
