use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use qb_core::types::BenchmarkKey;
use serde_json::json;
use std::sync::Arc;

pub async fn overall_retention_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let points = state.service_results.overall_retention();
    Ok(Json(json!(points)))
}

pub async fn benchmark_retention_handler(
    State(state): State<Arc<AppState>>,
    Path(benchmark): Path<String>,
) -> ResultAPI {
    let benchmark: BenchmarkKey = benchmark.parse()?;
    let points = state.service_results.benchmark_retention(benchmark);
    Ok(Json(json!(points)))
}
