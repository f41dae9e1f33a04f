use axum::extract::{Path, State};
use serde::Deserialize;

use crate::database::models::{Category, UpdateCategory};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, Payload, Validator};

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    Ok(ApiResponse::success(state.categories.find_all().await?))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Category> {
    let id = parse_id(&id, "category")?;
    Ok(ApiResponse::success(state.categories.find_by_id(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(request): Payload<CreateCategoryRequest>,
) -> ApiResult<Category> {
    let mut v = Validator::new();
    let name = v.required_text("name", request.name);
    v.finish()?;

    let category = Category {
        name,
        ..Default::default()
    };
    Ok(ApiResponse::success(state.categories.create(category).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(request): Payload<UpdateCategory>,
) -> ApiResult<Category> {
    let id = parse_id(&id, "category")?;
    Ok(ApiResponse::success(state.categories.update(id, &request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Category> {
    let id = parse_id(&id, "category")?;
    Ok(ApiResponse::success(state.categories.delete(id).await?))
}
