use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use qb_core::types::QuantLevel;
use serde_json::json;
use std::sync::Arc;

pub async fn model_ranking_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let ranking = state.service_results.model_ranking();
    Ok(Json(json!(ranking)))
}

pub async fn quant_ranking_handler(
    State(state): State<Arc<AppState>>,
    Path(quant): Path<String>,
) -> ResultAPI {
    let quant: QuantLevel = quant.parse()?;
    let ranking = state.service_results.quant_ranking(quant);
    Ok(Json(json!(ranking)))
}
