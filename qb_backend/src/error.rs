use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qb_core::error::ErrorCore;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, ErrorBackend>;
pub type ResultAPI = std::result::Result<Json<Value>, ErrorBackend>;
pub type ResultAPIFile = std::result::Result<Response, ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] ErrorCore),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Model not found: {0}")]
    ModelNotFound(String),
}

impl ErrorBackend {
    fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::Core(ErrorCore::UnknownBenchmark(_))
            | ErrorBackend::Core(ErrorCore::UnknownQuant(_))
            | ErrorBackend::Core(ErrorCore::UnknownExportFormat(_)) => StatusCode::BAD_REQUEST,
            ErrorBackend::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::IO(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::ModelNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!("ErrorBackend occurred: {}", self);
                "An unexpected error occurred".to_string()
            }
            _ => {
                warn!("Request rejected: {}", self);
                self.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
