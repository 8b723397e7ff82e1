use crate::data::{
    BenchmarkSection, DatasetSummary, RetentionPoint, SpeedQualityPoint, benchmark_sections,
    compute_overall_retention, dataset_summary, speed_quality_points,
};
use crate::types::ModelResult;
use serde::{Deserialize, Serialize};

/// Everything the landing view shows, computed in one pass over the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub summary: DatasetSummary,
    pub overall_retention: Vec<RetentionPoint>,
    pub benchmarks: Vec<BenchmarkSection>,
    pub speed_quality: Vec<SpeedQualityPoint>,
}

impl OverviewResponse {
    pub fn from_results(results: &[ModelResult]) -> Self {
        OverviewResponse {
            summary: dataset_summary(results),
            overall_retention: compute_overall_retention(results),
            benchmarks: benchmark_sections(results),
            speed_quality: speed_quality_points(results),
        }
    }
}
