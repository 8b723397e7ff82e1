use crate::error::{ErrorBackend, Result};
use qb_core::data::{
    ModelCard, ModelRanking, QuantRankingEntry, ResultsStore, RetentionPoint,
    compute_benchmark_retention, compute_overall_retention, model_cards, model_ranking,
    quant_ranking,
};
use qb_core::export::{self, ExportFormat};
use qb_core::server::payload::dataset_response::DatasetResponse;
use qb_core::server::payload::overview_response::OverviewResponse;
use qb_core::types::{BenchmarkKey, ModelResult, QuantLevel};
use std::sync::Arc;
use tracing::info;

/// A rendered download: body plus the headers a browser needs to save it.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Query layer over the shared results store. Every method is a read.
#[derive(Clone, Debug)]
pub struct ResultsService {
    store: Arc<ResultsStore>,
}

impl ResultsService {
    pub fn new(store: Arc<ResultsStore>) -> Self {
        Self { store }
    }

    fn results(&self) -> &[ModelResult] {
        self.store.load_results()
    }

    pub fn overview(&self) -> DatasetResponse<OverviewResponse> {
        DatasetResponse::from_dataset(self.results(), OverviewResponse::from_results)
    }

    pub fn model_cards(&self) -> DatasetResponse<Vec<ModelCard>> {
        DatasetResponse::from_dataset(self.results(), model_cards)
    }

    pub fn model(&self, slug: &str) -> Result<&ModelResult> {
        self.store
            .load_model_by_slug(slug)
            .ok_or_else(|| ErrorBackend::ModelNotFound(slug.to_string()))
    }

    pub fn export(&self, slug: &str, format: ExportFormat) -> Result<ExportFile> {
        let model = self.model(slug)?;
        let body = export::render(&model.quants, format)?;
        info!("Exporting {} as {}", model.slug, format);
        Ok(ExportFile {
            file_name: export::export_file_name(&model.name, format),
            content_type: format.content_type(),
            body,
        })
    }

    pub fn overall_retention(&self) -> DatasetResponse<Vec<RetentionPoint>> {
        DatasetResponse::from_dataset(self.results(), compute_overall_retention)
    }

    pub fn benchmark_retention(&self, benchmark: BenchmarkKey) -> DatasetResponse<Vec<RetentionPoint>> {
        DatasetResponse::from_dataset(self.results(), |results| {
            compute_benchmark_retention(results, benchmark)
        })
    }

    pub fn model_ranking(&self) -> DatasetResponse<Vec<ModelRanking>> {
        DatasetResponse::from_dataset(self.results(), model_ranking)
    }

    pub fn quant_ranking(&self, quant: QuantLevel) -> DatasetResponse<Vec<QuantRankingEntry>> {
        DatasetResponse::from_dataset(self.results(), |results| quant_ranking(results, quant))
    }
}
