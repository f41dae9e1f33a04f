use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "error": false,
        "msg": "Success!",
        "data": {
            "name": "Taman Pempek API",
            "version": version,
            "endpoints": {
                "auth": "/v1/login, /v1/logout, /v1/user/register (public)",
                "me": "/v1/me (protected)",
                "catalogue": "/v1/products, /v1/categories (protected listings, public single records)",
                "orders": "/v1/carts, /v1/payments, /v1/deliveries, /v1/banks (protected)",
                "setting": "/v1/setting/:id (public), /v1/setting/update/:id (protected)"
            }
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let result = match &state.database {
        Some(db) => db.health_check().await.map_err(|e| e.to_string()),
        None => Err("no database configured".to_string()),
    };

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "error": false,
                "msg": "Success!",
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": true,
                    "msg": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
