use crate::{interfaces::overview::controller::get_overview_handler, server::app_state::AppState};
use axum::routing::get;
use qb_core::server::routes::BackendApiOverview;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiOverview::Get.path().as_str(),
        get(get_overview_handler),
    )
}
