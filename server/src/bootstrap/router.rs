use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::bootstrap::state::AppState;
use imgstack_adapters::incoming::http_axum::routes::build_application_router;
use imgstack_adapters::shared::app_state::AppState as AdaptersAppState;

pub fn create_router(state: &AppState) -> Router {
    let adapters_state = state.to_adapters_state();
    let cors_layer = create_cors_layer(&adapters_state);

    let application_router = build_application_router(&adapters_state);

    application_router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(adapters_state)
}

/// Permissive by default, matching the original deployment; a single origin
/// can be pinned through `server.cors_origin`.
fn create_cors_layer(state: &AdaptersAppState) -> CorsLayer {
    let base_cors = CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    match &state.config.server.cors_origin {
        Some(origin) => base_cors
            .allow_headers([
                HeaderName::from_static("content-type"),
                HeaderName::from_static("accept"),
                HeaderName::from_static("origin"),
            ])
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000")),
            ),
        None => base_cors.allow_headers(Any).allow_origin(Any),
    }
}
