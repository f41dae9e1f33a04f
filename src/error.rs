// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::database::DatabaseError;
use crate::services::UploadError;

/// Message returned whenever the session gate rejects a request.
pub const LOGIN_REQUIRED: &str = "Login first!";

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every domain error reaches the client through one of these variants, so
/// this is the only place that decides status codes.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    /// One message per offending field.
    ValidationError(Vec<String>),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 502 Bad Gateway (object storage)
    BadGateway(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::ValidationError(messages) => messages.join("; "),
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::BadGateway(msg)
            | ApiError::ServiceUnavailable(msg) => msg.clone(),
        }
    }

    /// Error envelope: `{error: true, data: null, msg}`. Validation failures carry a list.
    pub fn to_json(&self) -> Value {
        let msg = match self {
            ApiError::ValidationError(messages) => json!(messages),
            _ => json!(self.message()),
        };
        json!({
            "error": true,
            "data": null,
            "msg": msg
        })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(messages: Vec<String>) -> Self {
        ApiError::ValidationError(messages)
    }

    pub fn login_required() -> Self {
        ApiError::Unauthorized(LOGIN_REQUIRED.to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ApiError::not_found(msg),
            DatabaseError::UniqueViolation(column) => {
                ApiError::bad_request(format!("Duplicate value for {}", column))
            }
            DatabaseError::QueryError(msg) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("Database query error: {}", msg);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            DatabaseError::MigrationError(msg) => {
                tracing::error!("Migration error: {}", msg);
                ApiError::service_unavailable("Service is being updated, please try again later")
            }
            DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::bad_request(err.to_string()),
            AuthError::Unauthenticated(_) => ApiError::login_required(),
            AuthError::Token(msg) => {
                tracing::error!("Token error: {}", msg);
                ApiError::internal_server_error("Failed to create token")
            }
            AuthError::Hash(msg) => {
                tracing::error!("Password hashing error: {}", msg);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            AuthError::Storage(db) => db.into(),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::NotConfigured => {
                tracing::error!("Image upload attempted without storage credentials");
                ApiError::internal_server_error("Image upload is not available")
            }
            UploadError::Transport(e) => {
                tracing::error!("Object storage unreachable: {}", e);
                ApiError::bad_gateway("Failed to upload image")
            }
            UploadError::Rejected(msg) => {
                tracing::error!("Object storage rejected upload: {}", msg);
                ApiError::bad_gateway("Failed to upload image")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionRejection;

    #[test]
    fn not_found_maps_to_404_with_entity_message() {
        let err = ApiError::from(DatabaseError::NotFound("Category not found".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_json(),
            json!({"error": true, "data": null, "msg": "Category not found"})
        );
    }

    #[test]
    fn storage_failures_hide_details() {
        let err = ApiError::from(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Database error occurred");
    }

    #[test]
    fn every_session_rejection_is_login_required() {
        for rejection in [
            SessionRejection::NoToken,
            SessionRejection::Unverified,
            SessionRejection::Expired,
            SessionRejection::SubjectMissing,
        ] {
            let err = ApiError::from(AuthError::Unauthenticated(rejection));
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
            assert_eq!(err.message(), LOGIN_REQUIRED);
        }
    }

    #[test]
    fn invalid_credentials_is_bad_request() {
        let err = ApiError::from(AuthError::InvalidCredentials);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid email or password");
    }

    #[test]
    fn validation_messages_are_listed() {
        let err = ApiError::validation_error(vec![
            "Error on name field, condition required".to_string(),
            "Error on email field, condition email".to_string(),
        ]);
        assert_eq!(err.to_json()["msg"].as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn upload_failures_are_bad_gateway() {
        let err = ApiError::from(UploadError::Rejected("quota".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unique_violation_is_a_bad_request() {
        let err = ApiError::from(DatabaseError::UniqueViolation("email".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Duplicate value for email");
    }
}
