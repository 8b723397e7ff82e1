pub mod aggregate;
pub mod results_store;

pub use aggregate::{
    BenchmarkSection, DatasetSummary, ModelCard, ModelRanking, QuantRankingEntry, RetentionPoint,
    SpeedQualityPoint, benchmark_sections, compute_benchmark_retention, compute_overall_retention,
    dataset_summary, model_cards, model_ranking, model_retention_curve, quant_ranking,
    speed_quality_points,
};
pub use results_store::{ResultsStore, read_results};
