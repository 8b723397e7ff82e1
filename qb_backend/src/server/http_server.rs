use crate::error::{ErrorBackend, Result};
use crate::interfaces::{model, overview, ranking, retention};
use crate::server::app_state::AppState;
use axum::http::StatusCode;
use qb_core::data::ResultsStore;
use qb_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use qb_core::server::routes::all_backend_api_paths;
use std::env;
use std::sync::Arc;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info, warn};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// All `/api` routes over `app_state`, with request tracing.
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(overview::route::routes())
        .merge(model::route::routes())
        .merge(retention::route::routes())
        .merge(ranking::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .nest("/api", routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the HTTP server over a results store built once by the caller.
///
/// # Behavior
/// - Loads the dataset before binding so the first request is served from cache.
///   An empty or broken document is not fatal: views answer `no_data`.
/// - Binds to `SERVER_BACKEND_HOST`:`SERVER_BACKEND_PORT` (defaults `0.0.0.0:3000`).
#[tokio::main]
pub async fn http_server_backend(store: Arc<ResultsStore>) -> Result<()> {
    let host = env::var("SERVER_BACKEND_HOST").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
    let port = env::var("SERVER_BACKEND_PORT").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
    let protocol = env::var("SERVER_BACKEND_PROTOCOL")
        .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));

    match store.load_results().len() {
        0 => warn!(
            "No benchmark data loaded from {}, serving the no-data state",
            store.path().display()
        ),
        models => info!("Serving {} models from {}", models, store.path().display()),
    }

    let app_state = Arc::new(AppState::new(store));
    let router = build_router(app_state);

    for path in all_backend_api_paths() {
        info!("Route GET {path}");
    }

    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use qb_generator::baseline::default_baselines;
    use qb_generator::generate_results;
    use qb_generator::lcg::DEFAULT_SEED;
    use qb_generator::writer::write_results;
    use serde_json::Value;
    use tempfile::{TempDir, tempdir};
    use tower::util::ServiceExt;

    fn app_with_data() -> (TempDir, axum::Router) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        let results = generate_results(&default_baselines(), DEFAULT_SEED).unwrap();
        write_results(&path, &results).unwrap();
        let store = Arc::new(ResultsStore::new(path));
        (dir, build_router(Arc::new(AppState::new(store))))
    }

    fn app_without_data() -> (TempDir, axum::Router) {
        let dir = tempdir().unwrap();
        let store = Arc::new(ResultsStore::new(dir.path().join("missing.json")));
        (dir, build_router(Arc::new(AppState::new(store))))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = get(app, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_overview_reports_no_data() {
        let (_dir, app) = app_without_data();
        let (status, body) = get_json(app, "/api/v1/overview").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "no_data" }));
    }

    #[tokio::test]
    async fn test_every_dataset_view_reports_no_data() {
        let (_dir, app) = app_without_data();
        for uri in [
            "/api/v1/models",
            "/api/v1/retention",
            "/api/v1/retention/gpqa",
            "/api/v1/rankings",
            "/api/v1/rankings/Q4_K_M",
        ] {
            let (status, body) = get_json(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["status"], "no_data", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_overview_with_data() {
        let (_dir, app) = app_with_data();
        let (status, body) = get_json(app, "/api/v1/overview").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["data"]["summary"]["models"], 5);
        assert_eq!(body["data"]["overallRetention"].as_array().unwrap().len(), 8);
        assert_eq!(body["data"]["overallRetention"][0]["retention"], 100.0);
        assert_eq!(body["data"]["benchmarks"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["speedQuality"].as_array().unwrap().len(), 40);
    }

    #[tokio::test]
    async fn test_model_lookup() {
        let (_dir, app) = app_with_data();
        let (status, body) = get_json(app.clone(), "/api/v1/models/phi-4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Phi-4");
        assert_eq!(body["quants"].as_array().unwrap().len(), 8);

        let (status, body) = get_json(app, "/api/v1/models/nonexistent-slug").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Model not found: nonexistent-slug");
    }

    #[tokio::test]
    async fn test_model_cards() {
        let (_dir, app) = app_with_data();
        let (_, body) = get_json(app, "/api/v1/models").await;
        let cards = body["data"].as_array().unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0]["slug"], "llama-3.1-8b");
        assert_eq!(cards[0]["sparkline"].as_array().unwrap().len(), 8);
        assert!(cards[0]["q4Retention"].as_f64().unwrap() > 85.0);
    }

    #[tokio::test]
    async fn test_benchmark_retention() {
        let (_dir, app) = app_with_data();
        let (status, body) = get_json(app.clone(), "/api/v1/retention/gpqa").await;
        assert_eq!(status, StatusCode::OK);
        let points = body["data"].as_array().unwrap();
        assert_eq!(points.len(), 8);
        assert_eq!(points[0]["quant"], "FP16");
        assert_eq!(points[7]["quant"], "IQ1_S");

        let (status, body) = get_json(app, "/api/v1/retention/mmlu").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown benchmark: mmlu");
    }

    #[tokio::test]
    async fn test_rankings() {
        let (_dir, app) = app_with_data();
        let (_, body) = get_json(app.clone(), "/api/v1/rankings/Q4_K_M").await;
        let entries = body["data"].as_array().unwrap();
        assert_eq!(entries.len(), 5);
        let retentions: Vec<f64> = entries
            .iter()
            .map(|e| e["retention"].as_f64().unwrap())
            .collect();
        assert!(retentions.windows(2).all(|w| w[0] >= w[1]));

        let (_, body) = get_json(app.clone(), "/api/v1/rankings").await;
        assert_eq!(body["data"].as_array().unwrap().len(), 5);

        let (status, _) = get_json(app, "/api/v1/rankings/Q2_K").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_csv_export_is_a_download() {
        let (_dir, app) = app_with_data();
        let (status, headers, body) = get(app, "/api/v1/models/phi-4/export/csv").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "text/csv");
        assert_eq!(
            headers["content-disposition"],
            "attachment; filename=\"phi-4-benchmarks.csv\""
        );
        assert_eq!(body.lines().count(), 9);
        assert!(body.starts_with("Quant,File Size (GB)"));
    }

    #[tokio::test]
    async fn test_json_export_and_bad_format() {
        let (_dir, app) = app_with_data();
        let (status, headers, body) =
            get(app.clone(), "/api/v1/models/gemma-2-9b/export/json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "application/json");
        let quants: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(quants.len(), 8);

        let (status, _, _) = get(app.clone(), "/api/v1/models/gemma-2-9b/export/xml").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = get(app, "/api/v1/models/unknown/export/csv").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back() {
        let (_dir, app) = app_with_data();
        let (status, _, body) = get(app, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }
}
