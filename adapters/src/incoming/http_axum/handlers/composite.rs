use axum::{Json, extract::State};
use tracing::debug;

use crate::incoming::http_axum::dto::requests::CompositeRequest;
use crate::incoming::http_axum::dto::responses::CompositeResponse;
use crate::incoming::http_axum::error_mapper::HttpError;
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/composite",
    request_body = CompositeRequest,
    responses(
        (status = 200, description = "Composite created", body = CompositeResponse),
        (status = 400, description = "Missing, empty or non-base64 image field"),
        (status = 500, description = "Image decode, normalization or encode failure")
    ),
    tag = "composite",
    summary = "Stack header, AI body and footer into one 1080x1350 PNG",
    operation_id = "composite_image"
))]
pub async fn composite_image(
    State(state): State<AppState>,
    Json(request): Json<CompositeRequest>,
) -> Result<Json<CompositeResponse>, HttpError> {
    debug!("composite request received");
    let image = state
        .composite_service
        .compose(request.into_input())
        .await
        .map_err(HttpError)?;
    Ok(Json(CompositeResponse::with_image(image)))
}
