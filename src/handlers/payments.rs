use axum::extract::{Multipart, Path, State};

use crate::database::models::{Payment, UpdatePayment};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, MultipartForm, Payload, Validator};

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Payment>> {
    Ok(ApiResponse::success(state.payments.find_all().await?))
}

pub async fn by_status(State(state): State<AppState>, Path(status): Path<String>) -> ApiResult<Vec<Payment>> {
    let payments = state
        .payments
        .find_where(&[("payment_status", status.into())])
        .await?;
    Ok(ApiResponse::success(payments))
}

pub async fn by_user_and_status(
    State(state): State<AppState>,
    Path((user_id, status)): Path<(String, String)>,
) -> ApiResult<Vec<Payment>> {
    let user_id = parse_id(&user_id, "user")?;
    let payments = state
        .payments
        .find_where(&[("user_id", user_id.into()), ("payment_status", status.into())])
        .await?;
    Ok(ApiResponse::success(payments))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Payment> {
    let id = parse_id(&id, "payment")?;
    Ok(ApiResponse::success(state.payments.find_by_id(id).await?))
}

/// POST /v1/payment/create (multipart, transfer receipt in `image`)
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> ApiResult<Payment> {
    let mut form = MultipartForm::read(multipart, "image").await?;

    let mut v = Validator::new();
    let user_id = v.required_number("user_id", form.number("user_id"));
    let delivery_id = v.optional_number("delivery_id", form.number("delivery_id"));
    let total_price = v.required_number("total_price", form.number("total_price"));
    let file = v.required_file("image", form.take_file());
    let address = v.required_text("address", form.text("address"));
    let whatsapp = v.required_text("whatsapp", form.text("whatsapp"));
    let payment_status = v.required_text("payment_status", form.text("payment_status"));
    let delivery_name = v.required_text("delivery_name", form.text("delivery_name"));
    let resi = v.required_text("resi", form.text("resi"));
    v.finish()?;

    let image = match file {
        Some(file) => state.storage.upload(file).await?,
        None => String::new(),
    };

    let payment = Payment {
        user_id,
        delivery_id,
        total_price,
        image,
        address,
        whatsapp,
        payment_status,
        delivery_name,
        resi,
        ..Default::default()
    };
    Ok(ApiResponse::success(state.payments.create(payment).await?))
}

/// PUT /v1/payment/update/:id (JSON or urlencoded form; the receipt cannot be replaced)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(request): Payload<UpdatePayment>,
) -> ApiResult<Payment> {
    let id = parse_id(&id, "payment")?;
    Ok(ApiResponse::success(state.payments.update(id, &request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Payment> {
    let id = parse_id(&id, "payment")?;
    Ok(ApiResponse::success(state.payments.delete(id).await?))
}
