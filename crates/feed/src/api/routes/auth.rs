use crate::api::error::{ApiError, INVALID_USER};
use crate::api::server::AppState;
use crate::models::user::{LoginRequest, LoginResponse, NewUser, RegisterRequest};
use crate::store::domains::user_store::CreateUserOutcome;
use actix_web::{
    web::{self, post, Data},
    HttpResponse,
};
use log::info;
use shared::security::password::{hash_password, verify_password};

const MIN_PASSWORD_LENGTH: usize = 6;
const USER_EXISTS: &str = "User already exists";

async fn register(
    body: web::Json<RegisterRequest>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let RegisterRequest {
        username,
        password,
        name,
        gender,
    } = body.into_inner();

    let password = match password {
        Some(password) if !password.is_empty() => password,
        _ => return Err(ApiError::BadRequest("Password is required")),
    };
    // Length in UTF-16 code units, as existing clients count it
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest("Password is too short"));
    }
    let username = match username {
        Some(username) if !username.is_empty() => username,
        _ => return Err(ApiError::BadRequest("Username is required")),
    };

    let user_store = app_state.store_context.user_store.clone();
    // Skip the hashing cost for the common duplicate case
    if user_store.get_user_id(&username)?.is_some() {
        return Err(ApiError::BadRequest(USER_EXISTS));
    }

    let password_hash = web::block(move || hash_password(&password)).await??;
    let new_user = NewUser {
        username,
        password_hash,
        name,
        gender,
    };

    match user_store.create_user(&new_user)? {
        CreateUserOutcome::Created(user_id) => {
            info!("Registered user {} ({user_id})", new_user.username);
            Ok(HttpResponse::Ok().body("User created successfully"))
        }
        CreateUserOutcome::UsernameTaken => Err(ApiError::BadRequest(USER_EXISTS)),
    }
}

async fn login(
    body: web::Json<LoginRequest>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let LoginRequest { username, password } = body.into_inner();

    let Some(user) = app_state.store_context.user_store.get_user(&username)? else {
        return Err(ApiError::BadRequest(INVALID_USER));
    };

    let stored_hash = user.password.clone();
    let matched = web::block(move || verify_password(&password, &stored_hash)).await?;
    if !matched {
        return Err(ApiError::BadRequest("Invalid password"));
    }

    let jwt_token = app_state.tokens.issue(&user.username)?;
    Ok(HttpResponse::Ok().json(LoginResponse { jwt_token }))
}

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", post().to(register))
        .route("/login", post().to(login));
}
