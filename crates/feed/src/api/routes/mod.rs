use crate::api::error::{ApiError, INVALID_USER};
use crate::api::server::AppState;
use shared::security::jwt_middleware::AuthenticatedUser;

pub(crate) mod auth;
pub(crate) mod tweets;
pub(crate) mod user;

/// Resolves the authenticated caller to a user id. A token can outlive its
/// user row, so a miss is a client error rather than a crash.
pub(crate) fn resolve_caller(
    app_state: &AppState,
    caller: &AuthenticatedUser,
) -> Result<i64, ApiError> {
    app_state
        .store_context
        .user_store
        .get_user_id(&caller.username)?
        .ok_or(ApiError::BadRequest(INVALID_USER))
}
