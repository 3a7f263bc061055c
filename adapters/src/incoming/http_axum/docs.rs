use utoipa::OpenApi;

use crate::incoming::http_axum::{dto, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::composite::composite_image,
    ),
    components(schemas(
        dto::requests::CompositeRequest,
        dto::responses::CompositeResponse,
        dto::responses::HealthResponse,
    )),
    tags(
        (name = "system", description = "Liveness"),
        (name = "composite", description = "Image stacking pipeline")
    )
)]
pub struct ApiDoc;
