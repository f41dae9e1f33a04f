use axum::extract::{Path, State};
use serde::Deserialize;

use crate::database::models::{Bank, UpdateBank};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, NumberField, Payload, Validator};

#[derive(Debug, Deserialize)]
pub struct CreateBankRequest {
    pub user_id: Option<NumberField>,
    #[serde(rename = "type")]
    pub bank_type: Option<String>,
    pub name: Option<String>,
    pub number: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Bank>> {
    Ok(ApiResponse::success(state.banks.find_all().await?))
}

/// GET /v1/banks/admin - accounts owned by the shop administrator
pub async fn admin(State(state): State<AppState>) -> ApiResult<Vec<Bank>> {
    let admin_id = state.config.shop.admin_user_id;
    let banks = state.banks.find_where(&[("user_id", admin_id.into())]).await?;
    Ok(ApiResponse::success(banks))
}

pub async fn by_user(State(state): State<AppState>, Path(user_id): Path<String>) -> ApiResult<Vec<Bank>> {
    let user_id = parse_id(&user_id, "user")?;
    let banks = state.banks.find_where(&[("user_id", user_id.into())]).await?;
    Ok(ApiResponse::success(banks))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Bank> {
    let id = parse_id(&id, "bank")?;
    Ok(ApiResponse::success(state.banks.find_by_id(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(request): Payload<CreateBankRequest>,
) -> ApiResult<Bank> {
    let mut v = Validator::new();
    let user_id = v.required_number("user_id", request.user_id);
    let bank_type = v.required_text("type", request.bank_type);
    let name = v.required_text("name", request.name);
    let number = v.required_text("number", request.number);
    v.finish()?;

    let bank = Bank {
        user_id,
        bank_type,
        name,
        number,
        ..Default::default()
    };
    Ok(ApiResponse::success(state.banks.create(bank).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(request): Payload<UpdateBank>,
) -> ApiResult<Bank> {
    let id = parse_id(&id, "bank")?;
    Ok(ApiResponse::success(state.banks.update(id, &request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Bank> {
    let id = parse_id(&id, "bank")?;
    Ok(ApiResponse::success(state.banks.delete(id).await?))
}
