use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use shortcut_core::ShortCode;

pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUrlRequest>,
) -> Result<Json<CreateUrlResponse>> {
    let code = state.shortener().shorten(&request.url).await?;

    Ok(Json(CreateUrlResponse {
        short_url: code.to_url(state.base_url()),
    }))
}

pub async fn resolve_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let code = ShortCode::new(short_code);

    match state.shortener().resolve(&code).await? {
        Some(url) => Ok(Redirect::temporary(&url)),
        None => Err(AppError::NotFound),
    }
}
