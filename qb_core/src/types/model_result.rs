use crate::types::{BenchmarkScores, QuantLevel};
use serde::{Deserialize, Serialize};

/// Measurements for one model at one quantization level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantResult {
    pub quant: QuantLevel,
    pub file_size_gb: f64,
    pub vram_gb: f64,
    pub decode_toks_per_sec: f64,
    pub prefill_toks_per_sec: f64,
    pub scores: BenchmarkScores,
    /// Overall quality kept vs. FP16, mean of `retention_per_benchmark`.
    pub retention: f64,
    pub retention_per_benchmark: BenchmarkScores,
}

/// One model and its results at every quant level it was measured at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub slug: String,
    pub name: String,
    pub params: String,
    pub huggingface: String,
    pub quants: Vec<QuantResult>,
}

impl ModelResult {
    pub fn quant(&self, level: QuantLevel) -> Option<&QuantResult> {
        self.quants.iter().find(|q| q.quant == level)
    }

    /// Mean overall retention across every reported level, 0 for a model with none.
    pub fn mean_retention(&self) -> f64 {
        match self.quants.len() {
            0 => 0.0,
            len => self.quants.iter().map(|q| q.retention).sum::<f64>() / len as f64,
        }
    }
}
