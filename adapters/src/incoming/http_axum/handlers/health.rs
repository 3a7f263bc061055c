use axum::Json;

use crate::incoming::http_axum::dto::responses::HealthResponse;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "system",
    summary = "Liveness check",
    operation_id = "health_check"
))]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Image compositor API is running".to_string(),
    })
}
