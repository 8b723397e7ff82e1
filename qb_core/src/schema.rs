//! Field-level checks run on a results document right after parsing.
//!
//! Parsing already guarantees shape and required keys. These checks cover what
//! serde cannot: numeric ranges, uniqueness of slugs, and at most one entry per
//! quant level within a model.

use crate::error::{ErrorCore, Result};
use crate::types::{BenchmarkScores, ModelResult, QuantResult};
use std::collections::HashSet;

const MAX_PERCENT: f64 = 100.0;

pub fn validate(results: &[ModelResult]) -> Result<()> {
    let mut slugs = HashSet::with_capacity(results.len());
    for (i, model) in results.iter().enumerate() {
        let path = format!("[{i}]");
        validate_model(&path, model)?;
        if !slugs.insert(model.slug.as_str()) {
            return Err(ErrorCore::schema(
                format!("{path}.slug"),
                format!("duplicate slug '{}'", model.slug),
            ));
        }
    }
    Ok(())
}

fn validate_model(path: &str, model: &ModelResult) -> Result<()> {
    if model.slug.trim().is_empty() {
        return Err(ErrorCore::schema(format!("{path}.slug"), "must not be empty"));
    }

    let mut levels = HashSet::with_capacity(model.quants.len());
    for (j, quant) in model.quants.iter().enumerate() {
        let path = format!("{path}.quants[{j}]");
        if !levels.insert(quant.quant) {
            return Err(ErrorCore::schema(
                format!("{path}.quant"),
                format!("quant level {} reported twice", quant.quant),
            ));
        }
        validate_quant(&path, quant)?;
    }
    Ok(())
}

fn validate_quant(path: &str, quant: &QuantResult) -> Result<()> {
    check_non_negative(path, "fileSizeGb", quant.file_size_gb)?;
    check_non_negative(path, "vramGb", quant.vram_gb)?;
    check_non_negative(path, "decodeToksPerSec", quant.decode_toks_per_sec)?;
    check_non_negative(path, "prefillToksPerSec", quant.prefill_toks_per_sec)?;
    check_percent(path, "retention", quant.retention)?;
    check_scores(&format!("{path}.scores"), &quant.scores)?;
    check_scores(
        &format!("{path}.retentionPerBenchmark"),
        &quant.retention_per_benchmark,
    )
}

fn check_scores(path: &str, scores: &BenchmarkScores) -> Result<()> {
    scores
        .iter()
        .try_for_each(|(key, value)| check_percent(path, key.as_str(), value))
}

fn check_non_negative(path: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(ErrorCore::schema(
        format!("{path}.{field}"),
        format!("expected a non-negative number, got {value}"),
    ))
}

fn check_percent(path: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=MAX_PERCENT).contains(&value) {
        return Ok(());
    }
    Err(ErrorCore::schema(
        format!("{path}.{field}"),
        format!("expected a value in [0, 100], got {value}"),
    ))
}
