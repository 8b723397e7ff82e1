use crate::export::ExportFormat;
use crate::types::{BenchmarkKey, QuantLevel};

pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiOverview {
    Get,
}

impl BackendApiOverview {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiOverview::Get => ApiPath::Static("/v1/overview"),
        }
    }
}

/// Passing `None` for a parameter yields the route template used by the router.
#[derive(Debug, Clone)]
pub enum BackendApiModel {
    List,
    Get,
    Export,
}

impl BackendApiModel {
    pub fn path(&self, slug: Option<&str>, format: Option<ExportFormat>) -> ApiPath {
        let slug = slug.unwrap_or("{slug}");
        match self {
            BackendApiModel::List => ApiPath::Static("/v1/models"),
            BackendApiModel::Get => ApiPath::Dynamic(format!("/v1/models/{}", slug)),
            BackendApiModel::Export => {
                let format = format
                    .map(|f| f.to_string())
                    .unwrap_or("{format}".to_string());
                ApiPath::Dynamic(format!("/v1/models/{}/export/{}", slug, format))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiRetention {
    Overall,
    Benchmark,
}

impl BackendApiRetention {
    pub fn path(&self, benchmark: Option<BenchmarkKey>) -> ApiPath {
        match self {
            BackendApiRetention::Overall => ApiPath::Static("/v1/retention"),
            BackendApiRetention::Benchmark => {
                let benchmark = benchmark
                    .map(|b| b.to_string())
                    .unwrap_or("{benchmark}".to_string());
                ApiPath::Dynamic(format!("/v1/retention/{}", benchmark))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiRanking {
    Models,
    Quant,
}

impl BackendApiRanking {
    pub fn path(&self, quant: Option<QuantLevel>) -> ApiPath {
        match self {
            BackendApiRanking::Models => ApiPath::Static("/v1/rankings"),
            BackendApiRanking::Quant => {
                let quant = quant
                    .map(|q| q.to_string())
                    .unwrap_or("{quant}".to_string());
                ApiPath::Dynamic(format!("/v1/rankings/{}", quant))
            }
        }
    }
}

/// Every route template, prefixed with `/api`.
pub fn all_backend_api_paths() -> Vec<String> {
    let paths = [
        BackendApiOverview::Get.path(),
        BackendApiModel::List.path(None, None),
        BackendApiModel::Get.path(None, None),
        BackendApiModel::Export.path(None, None),
        BackendApiRetention::Overall.path(None),
        BackendApiRetention::Benchmark.path(None),
        BackendApiRanking::Models.path(None),
        BackendApiRanking::Quant.path(None),
    ];
    paths
        .iter()
        .map(|path| format!("/api{}", path.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_and_concrete_paths() {
        assert_eq!(
            BackendApiModel::Get.path(None, None).as_str(),
            "/v1/models/{slug}"
        );
        assert_eq!(
            BackendApiModel::Export
                .path(Some("phi-4"), Some(ExportFormat::Csv))
                .as_str(),
            "/v1/models/phi-4/export/csv"
        );
        assert_eq!(
            BackendApiRetention::Benchmark
                .path(Some(BenchmarkKey::Gpqa))
                .as_str(),
            "/v1/retention/gpqa"
        );
        assert_eq!(
            BackendApiRanking::Quant.path(Some(QuantLevel::IQ1_S)).as_str(),
            "/v1/rankings/IQ1_S"
        );
    }

    #[test]
    fn test_all_paths_are_prefixed() {
        let paths = all_backend_api_paths();
        assert_eq!(paths.len(), 8);
        assert!(paths.iter().all(|p| p.starts_with("/api/v1/")));
    }
}
