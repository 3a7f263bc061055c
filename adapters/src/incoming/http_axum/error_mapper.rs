use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use imgstack_application::error::AppError;

pub struct HttpError(pub AppError);

/// Validation-class failures are the caller's fault: 400 with a bare
/// `{ "error": .. }` body. Pipeline failures are 500 and carry the
/// `success: false` envelope the success path mirrors.
impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        if app_error.is_client_error() {
            debug!("Client error response generated: {}", app_error);
            let body = json!({ "error": client_message(app_error) });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        error!("Server error response generated: {}", app_error);
        let body = json!({
            "success": false,
            "error": server_message(app_error),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn client_message(app_error: &AppError) -> String {
    match app_error {
        AppError::JsonError(_) => "Invalid JSON format".to_string(),
        other => other.to_string(),
    }
}

fn server_message(app_error: &AppError) -> String {
    match app_error {
        // Pipeline errors name the offending image; pass them through.
        AppError::Domain(_) | AppError::DecodeError { .. } | AppError::EncodeError { .. } => {
            app_error.to_string()
        }
        AppError::ConfigError { .. } => "Configuration error".to_string(),
        _ => "Internal server error".to_string(),
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
