use axum::extract::{Multipart, Path, State};

use crate::database::models::{Setting, UpdateSetting};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::support::{parse_id, MultipartForm};

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Setting> {
    let id = parse_id(&id, "setting")?;
    Ok(ApiResponse::success(state.settings.find_by_id(id).await?))
}

/// PUT /v1/setting/update/:id (multipart; no file keeps the current image)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> ApiResult<Setting> {
    let id = parse_id(&id, "setting")?;
    let mut form = MultipartForm::read(multipart, "image").await?;

    let mut request = UpdateSetting {
        image: String::new(),
        description: form.text("description").unwrap_or_default(),
        email: form.text("email").unwrap_or_default(),
        instagram: form.text("instagram").unwrap_or_default(),
        website: form.text("website").unwrap_or_default(),
    };

    if let Some(file) = form.take_file() {
        state.settings.find_by_id(id).await?;
        request.image = state.storage.upload(file).await?;
    }

    Ok(ApiResponse::success(state.settings.update(id, &request).await?))
}
