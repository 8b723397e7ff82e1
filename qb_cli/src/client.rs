use crate::error::{ErrorCli, Result};
use qb_core::export::ExportFormat;
use qb_core::server::routes::{
    ApiPath, BackendApiModel, BackendApiOverview, BackendApiRanking, BackendApiRetention,
};
use qb_core::types::{BenchmarkKey, QuantLevel};
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Client, Response};
use serde_json::Value;

/// A downloaded export, with the file name the server suggested.
pub struct ExportDownload {
    pub file_name: Option<String>,
    pub body: String,
}

pub struct CliClient {
    client: Client,
    base_url: String,
    base_url_api: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        CliClient {
            client: Client::new(),
            base_url_api: format!("{}/api", base_url),
            base_url,
        }
    }

    fn url(&self, path: ApiPath) -> String {
        format!("{}{}", self.base_url_api, path.as_str())
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<Response> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() => {
                return Err(ErrorCli::ConnectionRefused(self.base_url.clone()));
            }
            Err(e) => return Err(ErrorCli::Http(e)),
        };
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let text = res.text().await.unwrap_or_default();
        Err(ErrorCli::Api {
            status: status.as_u16(),
            message: error_message(&text),
        })
    }

    async fn get_text(&self, path: ApiPath) -> Result<String> {
        let result = self.client.get(self.url(path)).send().await;
        let res = self.handle_response(result).await?;
        Ok(res.text().await?)
    }

    pub async fn get_overview(&self) -> Result<String> {
        self.get_text(BackendApiOverview::Get.path()).await
    }

    pub async fn list_models(&self) -> Result<String> {
        self.get_text(BackendApiModel::List.path(None, None)).await
    }

    pub async fn get_model(&self, slug: &str) -> Result<String> {
        self.get_text(BackendApiModel::Get.path(Some(slug), None)).await
    }

    pub async fn export_model(&self, slug: &str, format: ExportFormat) -> Result<ExportDownload> {
        let path = BackendApiModel::Export.path(Some(slug), Some(format));
        let result = self.client.get(self.url(path)).send().await;
        let res = self.handle_response(result).await?;
        let file_name = res
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(attachment_file_name);
        Ok(ExportDownload {
            file_name,
            body: res.text().await?,
        })
    }

    pub async fn get_retention(&self, benchmark: Option<BenchmarkKey>) -> Result<String> {
        let path = match benchmark {
            Some(_) => BackendApiRetention::Benchmark.path(benchmark),
            None => BackendApiRetention::Overall.path(None),
        };
        self.get_text(path).await
    }

    pub async fn get_ranking(&self, quant: Option<QuantLevel>) -> Result<String> {
        let path = match quant {
            Some(_) => BackendApiRanking::Quant.path(quant),
            None => BackendApiRanking::Models.path(None),
        };
        self.get_text(path).await
    }
}

/// The backend answers errors as `{"error": "..."}`; anything else is shown raw.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn attachment_file_name(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
