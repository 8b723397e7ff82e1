use crate::{
    interfaces::retention::controller::{benchmark_retention_handler, overall_retention_handler},
    server::app_state::AppState,
};
use axum::routing::get;
use qb_core::server::routes::BackendApiRetention;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiRetention::Overall.path(None).as_str(),
            get(overall_retention_handler),
        )
        .route(
            BackendApiRetention::Benchmark.path(None).as_str(),
            get(benchmark_retention_handler),
        )
}
