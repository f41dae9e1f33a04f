use axum::extract::{Multipart, Path, State};

use crate::database::models::{Product, UpdateProduct};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, MultipartForm, Validator};

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    Ok(ApiResponse::success(state.products.find_all().await?))
}

pub async fn by_user(State(state): State<AppState>, Path(user_id): Path<String>) -> ApiResult<Vec<Product>> {
    let user_id = parse_id(&user_id, "user")?;
    let products = state.products.find_where(&[("user_id", user_id.into())]).await?;
    Ok(ApiResponse::success(products))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<Vec<Product>> {
    let category_id = parse_id(&category_id, "category")?;
    let products = state
        .products
        .find_where(&[("category_id", category_id.into())])
        .await?;
    Ok(ApiResponse::success(products))
}

pub async fn by_user_and_category(
    State(state): State<AppState>,
    Path((user_id, category_id)): Path<(String, String)>,
) -> ApiResult<Vec<Product>> {
    let user_id = parse_id(&user_id, "user")?;
    let category_id = parse_id(&category_id, "category")?;
    let products = state
        .products
        .find_where(&[("user_id", user_id.into()), ("category_id", category_id.into())])
        .await?;
    Ok(ApiResponse::success(products))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;
    Ok(ApiResponse::success(state.products.find_by_id(id).await?))
}

/// POST /v1/product/create (multipart, `image` required)
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> ApiResult<Product> {
    let mut form = MultipartForm::read(multipart, "image").await?;

    let mut v = Validator::new();
    let user_id = v.required_number("user_id", form.number("user_id"));
    let category_id = v.required_number("category_id", form.number("category_id"));
    let name = v.required_text("name", form.text("name"));
    let file = v.required_file("image", form.take_file());
    let description = v.required_text("description", form.text("description"));
    let price = v.required_number("price", form.number("price"));
    let stock = v.required_number("stock", form.number("stock"));
    v.finish()?;

    let image = match file {
        Some(file) => state.storage.upload(file).await?,
        None => String::new(),
    };

    let product = Product {
        user_id,
        category_id,
        name,
        image,
        description,
        price,
        stock,
        ..Default::default()
    };
    Ok(ApiResponse::success(state.products.create(product).await?))
}

/// PUT /v1/product/update/:id (multipart, every field optional)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;
    let mut form = MultipartForm::read(multipart, "image").await?;

    let mut v = Validator::new();
    let mut request = UpdateProduct {
        category_id: v.optional_number("category_id", form.number("category_id")),
        name: form.text("name").unwrap_or_default(),
        image: String::new(),
        description: form.text("description").unwrap_or_default(),
        price: v.optional_number("price", form.number("price")),
        stock: v.optional_number("stock", form.number("stock")),
    };
    v.finish()?;

    if let Some(file) = form.take_file() {
        // don't upload for a product that isn't there
        state.products.find_by_id(id).await?;
        request.image = state.storage.upload(file).await?;
    }

    Ok(ApiResponse::success(state.products.update(id, &request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;
    Ok(ApiResponse::success(state.products.delete(id).await?))
}
