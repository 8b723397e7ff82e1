use crate::types::{BenchmarkScores, ModelResult, QuantLevel, QuantResult};

/// A quant result whose five per-benchmark retentions all equal `retention`.
pub(crate) fn quant_result(quant: QuantLevel, retention: f64) -> QuantResult {
    QuantResult {
        quant,
        file_size_gb: 10.0,
        vram_gb: 11.0,
        decode_toks_per_sec: 30.0,
        prefill_toks_per_sec: 1200.0,
        scores: BenchmarkScores::from_fn(|_| 50.0 * retention / 100.0),
        retention,
        retention_per_benchmark: BenchmarkScores::from_fn(|_| retention),
    }
}

pub(crate) fn model(slug: &str, quants: &[(QuantLevel, f64)]) -> ModelResult {
    ModelResult {
        slug: slug.to_string(),
        name: format!("Model {slug}"),
        params: "7B".to_string(),
        huggingface: format!("https://huggingface.co/test/{slug}"),
        quants: quants
            .iter()
            .map(|(quant, retention)| quant_result(*quant, *retention))
            .collect(),
    }
}
