use axum::extract::{Path, State};
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::database::models::{UpdateUser, User};
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, Payload, Validator};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub whatsapp: Option<String>,
    pub gender: Option<String>,
    pub role: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    Ok(ApiResponse::success(state.users.find_all().await?))
}

pub async fn by_role(State(state): State<AppState>, Path(role): Path<String>) -> ApiResult<Vec<User>> {
    let users = state.users.find_where(&[("role", role.into())]).await?;
    Ok(ApiResponse::success(users))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<User> {
    let id = parse_id(&id, "user")?;
    Ok(ApiResponse::success(state.users.find_by_id(id).await?))
}

/// POST /v1/user/register
pub async fn register(
    State(state): State<AppState>,
    Payload(request): Payload<RegisterRequest>,
) -> ApiResult<User> {
    let mut v = Validator::new();
    let name = v.required_text("name", request.name);
    let email = v.required_text("email", request.email).trim().to_string();
    v.email("email", &email);
    let password = v.required_text("password", request.password);
    let whatsapp = v.required_text("whatsapp", request.whatsapp);
    let gender = v.required_text("gender", request.gender);
    let role = v.required_text("role", request.role);
    v.finish()?;

    ensure_email_free(&state, &email, None).await?;

    let user = User {
        name,
        email,
        password: hash_password(&password)?,
        whatsapp,
        gender,
        role,
        ..Default::default()
    };
    let user = state.users.create(user).await.map_err(email_taken)?;
    Ok(ApiResponse::success(user))
}

/// PUT /v1/user/update/:id
///
/// Empty fields keep their stored value. A new password is hashed before it is merged.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(mut request): Payload<UpdateUser>,
) -> ApiResult<User> {
    let id = parse_id(&id, "user")?;

    let mut v = Validator::new();
    v.email("email", &request.email);
    v.finish()?;

    if !request.email.is_empty() {
        request.email = request.email.trim().to_string();
        ensure_email_free(&state, &request.email, Some(id)).await?;
    }
    if !request.password.is_empty() {
        request.password = hash_password(&request.password)?;
    }

    let user = state.users.update(id, &request).await.map_err(email_taken)?;
    Ok(ApiResponse::success(user))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<User> {
    let id = parse_id(&id, "user")?;
    Ok(ApiResponse::success(state.users.delete(id).await?))
}

const EMAIL_TAKEN: &str = "Email already registered";

/// Covers the window between `ensure_email_free` and the write.
fn email_taken(err: DatabaseError) -> ApiError {
    match err {
        DatabaseError::UniqueViolation(column) if column == "email" => ApiError::bad_request(EMAIL_TAKEN),
        other => other.into(),
    }
}

async fn ensure_email_free(state: &AppState, email: &str, owner: Option<i64>) -> Result<(), ApiError> {
    let taken = state
        .users
        .find_where(&[("email", email.into())])
        .await?
        .into_iter()
        .any(|u| Some(u.id) != owner);
    if taken {
        return Err(ApiError::bad_request(EMAIL_TAKEN));
    }
    Ok(())
}
