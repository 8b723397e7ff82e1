use crate::{
    interfaces::model::controller::{export_model_handler, get_model_handler, list_models_handler},
    server::app_state::AppState,
};
use axum::routing::get;
use qb_core::server::routes::BackendApiModel;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiModel::List.path(None, None).as_str(),
            get(list_models_handler),
        )
        .route(
            BackendApiModel::Get.path(None, None).as_str(),
            get(get_model_handler),
        )
        .route(
            BackendApiModel::Export.path(None, None).as_str(),
            get(export_model_handler),
        )
}
