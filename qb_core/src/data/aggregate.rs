//! Pure views over a loaded dataset. Nothing here allocates beyond its own
//! output or touches shared state, so every renderer can call these freely.

use crate::types::{BenchmarkKey, ModelResult, QuantLevel, QuantResult};
use crate::utils::math::{mean, round_to};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionPoint {
    pub quant: QuantLevel,
    pub retention: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSection {
    pub key: BenchmarkKey,
    pub name: String,
    pub description: String,
    pub data: Vec<RetentionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedQualityPoint {
    pub model_name: String,
    pub quant: QuantLevel,
    pub retention: f64,
    pub decode_toks_per_sec: f64,
    pub vram_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRanking {
    pub slug: String,
    pub model_name: String,
    pub quants: Vec<RetentionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantRankingEntry {
    pub slug: String,
    pub model_name: String,
    pub retention: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCard {
    pub slug: String,
    pub name: String,
    pub params: String,
    pub sparkline: Vec<RetentionPoint>,
    pub q4_retention: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub models: usize,
    pub quant_levels: usize,
    pub benchmarks: usize,
    pub total_questions: u32,
}

/// Mean overall retention per quant level across every model reporting it,
/// in the level order of the first model.
pub fn compute_overall_retention(results: &[ModelResult]) -> Vec<RetentionPoint> {
    average_by_quant(results, |q| q.retention)
}

/// Same as [`compute_overall_retention`] for a single benchmark.
pub fn compute_benchmark_retention(
    results: &[ModelResult],
    benchmark: BenchmarkKey,
) -> Vec<RetentionPoint> {
    average_by_quant(results, |q| q.retention_per_benchmark.get(benchmark))
}

fn average_by_quant<F>(results: &[ModelResult], value_of: F) -> Vec<RetentionPoint>
where
    F: Fn(&QuantResult) -> f64,
{
    let Some(first) = results.first() else {
        return Vec::new();
    };

    first
        .quants
        .iter()
        .map(|reference| {
            let values: Vec<f64> = results
                .iter()
                .filter_map(|model| model.quant(reference.quant))
                .map(&value_of)
                .collect();
            RetentionPoint {
                quant: reference.quant,
                retention: mean(&values).map_or(0.0, |avg| round_to(avg, 1)),
            }
        })
        .collect()
}

/// Overall retention per benchmark, one section per key in canonical order.
pub fn benchmark_sections(results: &[ModelResult]) -> Vec<BenchmarkSection> {
    BenchmarkKey::ALL
        .into_iter()
        .map(|key| BenchmarkSection {
            key,
            name: key.name().to_string(),
            description: key.description().to_string(),
            data: compute_benchmark_retention(results, key),
        })
        .collect()
}

pub fn model_retention_curve(model: &ModelResult) -> Vec<RetentionPoint> {
    model
        .quants
        .iter()
        .map(|q| RetentionPoint {
            quant: q.quant,
            retention: q.retention,
        })
        .collect()
}

/// Models ordered by mean retention over all their levels, best first.
pub fn model_ranking(results: &[ModelResult]) -> Vec<ModelRanking> {
    let mut ranked: Vec<(f64, ModelRanking)> = results
        .iter()
        .map(|model| {
            (
                model.mean_retention(),
                ModelRanking {
                    slug: model.slug.clone(),
                    model_name: model.name.clone(),
                    quants: model_retention_curve(model),
                },
            )
        })
        .collect();
    ranked.sort_by(|(a, _), (b, _)| descending(*a, *b));
    ranked.into_iter().map(|(_, ranking)| ranking).collect()
}

/// Models reporting a positive retention at `quant`, best first.
pub fn quant_ranking(results: &[ModelResult], quant: QuantLevel) -> Vec<QuantRankingEntry> {
    let mut ranked: Vec<QuantRankingEntry> = results
        .iter()
        .filter_map(|model| {
            let retention = model.quant(quant)?.retention;
            (retention > 0.0).then(|| QuantRankingEntry {
                slug: model.slug.clone(),
                model_name: model.name.clone(),
                retention,
            })
        })
        .collect();
    ranked.sort_by(|a, b| descending(a.retention, b.retention));
    ranked
}

pub fn speed_quality_points(results: &[ModelResult]) -> Vec<SpeedQualityPoint> {
    results
        .iter()
        .flat_map(|model| {
            model.quants.iter().map(|q| SpeedQualityPoint {
                model_name: model.name.clone(),
                quant: q.quant,
                retention: q.retention,
                decode_toks_per_sec: q.decode_toks_per_sec,
                vram_gb: q.vram_gb,
            })
        })
        .collect()
}

pub fn model_cards(results: &[ModelResult]) -> Vec<ModelCard> {
    results
        .iter()
        .map(|model| ModelCard {
            slug: model.slug.clone(),
            name: model.name.clone(),
            params: model.params.clone(),
            sparkline: model_retention_curve(model),
            q4_retention: model
                .quant(QuantLevel::Q4_K_M)
                .map_or(0.0, |q| q.retention),
        })
        .collect()
}

pub fn dataset_summary(results: &[ModelResult]) -> DatasetSummary {
    let quant_levels: HashSet<QuantLevel> = results
        .iter()
        .flat_map(|model| model.quants.iter().map(|q| q.quant))
        .collect();

    DatasetSummary {
        models: results.len(),
        quant_levels: quant_levels.len(),
        benchmarks: BenchmarkKey::ALL.len(),
        total_questions: BenchmarkKey::ALL.iter().map(|key| key.questions()).sum(),
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
