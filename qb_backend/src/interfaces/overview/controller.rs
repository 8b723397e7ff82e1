use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::json;
use std::sync::Arc;

pub async fn get_overview_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let overview = state.service_results.overview();
    Ok(Json(json!(overview)))
}
