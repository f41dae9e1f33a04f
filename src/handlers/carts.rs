use axum::extract::{Path, State};
use serde::Deserialize;

use crate::database::models::{Cart, UpdateCart};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, NumberField, Payload, Validator};

#[derive(Debug, Deserialize)]
pub struct CreateCartRequest {
    pub user_id: Option<NumberField>,
    pub product_id: Option<NumberField>,
    pub payment_id: Option<NumberField>,
    pub quantity: Option<NumberField>,
    pub total_price: Option<NumberField>,
    #[serde(rename = "isActived")]
    pub is_active: Option<String>,
}

/// Cart updates accept numbers either as JSON numbers or numeric strings.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: Option<NumberField>,
    pub payment_id: Option<NumberField>,
    pub quantity: Option<NumberField>,
    pub total_price: Option<NumberField>,
    #[serde(rename = "isActived")]
    pub is_active: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Cart>> {
    Ok(ApiResponse::success(state.carts.find_all().await?))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Cart> {
    let id = parse_id(&id, "cart")?;
    Ok(ApiResponse::success(state.carts.find_by_id(id).await?))
}

pub async fn by_payment(State(state): State<AppState>, Path(payment_id): Path<String>) -> ApiResult<Vec<Cart>> {
    let payment_id = parse_id(&payment_id, "payment")?;
    let carts = state.carts.find_where(&[("payment_id", payment_id.into())]).await?;
    Ok(ApiResponse::success(carts))
}

pub async fn by_product(State(state): State<AppState>, Path(product_id): Path<String>) -> ApiResult<Vec<Cart>> {
    let product_id = parse_id(&product_id, "product")?;
    let carts = state.carts.find_where(&[("product_id", product_id.into())]).await?;
    Ok(ApiResponse::success(carts))
}

/// GET /v1/carts/:is_active/:user_id
pub async fn by_status_and_user(
    State(state): State<AppState>,
    Path((is_active, user_id)): Path<(String, String)>,
) -> ApiResult<Vec<Cart>> {
    let user_id = parse_id(&user_id, "user")?;
    let carts = state
        .carts
        .find_where(&[("is_active", is_active.into()), ("user_id", user_id.into())])
        .await?;
    Ok(ApiResponse::success(carts))
}

/// GET /v1/carts/total/:is_active/:user_id - sum of `total_price`, 0 when empty
pub async fn total(
    State(state): State<AppState>,
    Path((is_active, user_id)): Path<(String, String)>,
) -> ApiResult<i64> {
    let user_id = parse_id(&user_id, "user")?;
    let total = state
        .carts
        .sum("total_price", &[("is_active", is_active.into()), ("user_id", user_id.into())])
        .await?;
    Ok(ApiResponse::success(total))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(request): Payload<CreateCartRequest>,
) -> ApiResult<Cart> {
    let mut v = Validator::new();
    let user_id = v.required_number("user_id", request.user_id);
    let product_id = v.required_number("product_id", request.product_id);
    let payment_id = v.optional_number("payment_id", request.payment_id);
    let quantity = v.required_number("quantity", request.quantity);
    let total_price = v.required_number("total_price", request.total_price);
    let is_active = v.required_text("isActived", request.is_active);
    v.finish()?;

    let cart = Cart {
        user_id,
        product_id,
        payment_id,
        quantity,
        total_price,
        is_active,
        ..Default::default()
    };
    Ok(ApiResponse::success(state.carts.create(cart).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(body): Payload<UpdateCartRequest>,
) -> ApiResult<Cart> {
    let id = parse_id(&id, "cart")?;

    let mut v = Validator::new();
    let request = UpdateCart {
        product_id: v.optional_number("product_id", body.product_id),
        payment_id: v.optional_number("payment_id", body.payment_id),
        quantity: v.optional_number("quantity", body.quantity),
        total_price: v.optional_number("total_price", body.total_price),
        is_active: body.is_active.unwrap_or_default(),
    };
    v.finish()?;

    Ok(ApiResponse::success(state.carts.update(id, &request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Cart> {
    let id = parse_id(&id, "cart")?;
    Ok(ApiResponse::success(state.carts.delete(id).await?))
}
