// Login, logout and the current-identity endpoint.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::IntoResponse,
    Extension,
};
use serde::Deserialize;
use serde_json::Value;

use crate::auth::cookies::{cleared_session_cookie, session_cookie};
use crate::auth::Identity;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{Payload, Validator};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /v1/login
///
/// Returns the user plus a `token`, and sets the same token as the
/// http-only session cookie.
pub async fn login(
    State(state): State<AppState>,
    Payload(request): Payload<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Validator::new();
    let email = v.required_text("email", request.email);
    let password = v.required_text("password", request.password);
    v.finish()?;

    let (token, user) = state
        .sessions
        .issue_session(email.trim(), &password, chrono::Utc::now())
        .await
        .map_err(|e| {
            tracing::warn!("Login failed for '{}': {}", email.trim(), e);
            ApiError::from(e)
        })?;

    let cookie = session_cookie(&state.config.security, &token, state.sessions.ttl_secs());
    Ok(([(SET_COOKIE, cookie)], ApiResponse::success(user).with_token(token)))
}

/// POST /v1/logout
///
/// Tokens are stateless; logging out only expires the cookie.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = cleared_session_cookie(&state.config.security);
    (
        [(SET_COOKIE, cookie)],
        ApiResponse::with_message(Value::Null, "Logged out successfully!"),
    )
}

/// GET /v1/me
pub async fn me(Extension(identity): Extension<Identity>) -> ApiResult<Identity> {
    Ok(ApiResponse::success(identity))
}
