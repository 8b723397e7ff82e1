use crate::{
    interfaces::ranking::controller::{model_ranking_handler, quant_ranking_handler},
    server::app_state::AppState,
};
use axum::routing::get;
use qb_core::server::routes::BackendApiRanking;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiRanking::Models.path(None).as_str(),
            get(model_ranking_handler),
        )
        .route(
            BackendApiRanking::Quant.path(None).as_str(),
            get(quant_ranking_handler),
        )
}
