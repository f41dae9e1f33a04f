use axum::extract::{Path, State};
use serde::Deserialize;

use crate::database::models::{Delivery, UpdateDelivery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, Payload, Validator};

#[derive(Debug, Deserialize)]
pub struct CreateDeliveryRequest {
    pub name: Option<String>,
    pub whatsapp: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Delivery>> {
    Ok(ApiResponse::success(state.deliveries.find_all().await?))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Delivery> {
    let id = parse_id(&id, "delivery")?;
    Ok(ApiResponse::success(state.deliveries.find_by_id(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(request): Payload<CreateDeliveryRequest>,
) -> ApiResult<Delivery> {
    let mut v = Validator::new();
    let name = v.required_text("name", request.name);
    let whatsapp = v.required_text("whatsapp", request.whatsapp);
    v.finish()?;

    let delivery = Delivery {
        name,
        whatsapp,
        ..Default::default()
    };
    Ok(ApiResponse::success(state.deliveries.create(delivery).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(request): Payload<UpdateDelivery>,
) -> ApiResult<Delivery> {
    let id = parse_id(&id, "delivery")?;
    Ok(ApiResponse::success(state.deliveries.update(id, &request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Delivery> {
    let id = parse_id(&id, "delivery")?;
    Ok(ApiResponse::success(state.deliveries.delete(id).await?))
}
