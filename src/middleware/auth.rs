use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::cookies::read_cookie;
use crate::auth::AuthError;
use crate::error::ApiError;
use crate::state::AppState;

/// Session gate for protected routes.
///
/// Reads the session cookie, validates it and injects the resolved
/// `Identity` into request extensions. Any rejection ends the request with
/// 401 before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = read_cookie(request.headers(), &state.config.security.cookie_name);

    let identity = state
        .sessions
        .validate(token.as_deref(), chrono::Utc::now())
        .await
        .map_err(|e| {
            match &e {
                AuthError::Unauthenticated(reason) => {
                    tracing::warn!("Session rejected on {}: {:?}", request.uri().path(), reason)
                }
                other => tracing::error!("Session validation failed: {}", other),
            }
            ApiError::from(e)
        })?;

    tracing::debug!("Session accepted for user {} ({})", identity.id, identity.email);

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
