use crate::error::{ResultAPI, ResultAPIFile};
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use qb_core::export::ExportFormat;
use serde_json::json;
use std::sync::Arc;

pub async fn list_models_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let cards = state.service_results.model_cards();
    Ok(Json(json!(cards)))
}

pub async fn get_model_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ResultAPI {
    let model = state.service_results.model(&slug)?;
    Ok(Json(json!(model)))
}

/// Sends the model's quant results as a file download.
pub async fn export_model_handler(
    State(state): State<Arc<AppState>>,
    Path((slug, format)): Path<(String, String)>,
) -> ResultAPIFile {
    let format: ExportFormat = format.parse()?;
    let file = state.service_results.export(&slug, format)?;
    let disposition = format!("attachment; filename=\"{}\"", file.file_name);

    Ok((
        [
            (CONTENT_TYPE, file.content_type.to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response())
}
