use qb_core::data::ResultsStore;
use qb_core::logger::init_tracing;
use std::sync::Arc;
use tracing::error;

mod application;
mod error;
mod interfaces;
mod server;

fn main() {
    init_tracing();
    let store = Arc::new(ResultsStore::from_env());

    if let Err(e) = server::http_server::http_server_backend(store) {
        error!("Backend stopped: {e}");
        std::process::exit(1);
    }
}
