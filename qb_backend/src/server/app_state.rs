use crate::application::results::service::ResultsService;
use qb_core::data::ResultsStore;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub service_results: ResultsService,
}

impl AppState {
    pub fn new(store: Arc<ResultsStore>) -> Self {
        AppState {
            service_results: ResultsService::new(store),
        }
    }
}
