use crate::baseline::{BaselineModel, validate_baselines};
use crate::error::{ErrorGenerator, Result};
use crate::lcg::RandomSource;
use crate::profile::QuantProfile;
use qb_core::schema;
use qb_core::types::{BenchmarkKey, BenchmarkScores, ModelResult, QuantLevel, QuantResult};
use qb_core::utils::math::round_to;
use tracing::debug;

/// Multiplicative noise spread on file size and VRAM (±2%).
pub const SIZE_NOISE: f64 = 0.04;
/// Multiplicative noise spread on decode and prefill throughput (±5%).
pub const SPEED_NOISE: f64 = 0.1;
/// Runtime buffers on top of the static weights.
pub const VRAM_OVERHEAD: f64 = 1.08;

const SIZE_DECIMALS: i32 = 2;
const VALUE_DECIMALS: i32 = 1;

/// Simulates quantized results from FP16 baselines.
///
/// Every draw goes through `rng` in a fixed order (five retentions in
/// benchmark order unless the level is FP16, then file size, VRAM, decode and
/// prefill noise), so the output depends only on the seed and the baselines.
pub struct Generator<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> Generator<R> {
    pub fn new(rng: R) -> Self {
        Generator { rng }
    }

    /// Generates every model at every quant level, then validates the whole
    /// document. Nothing is returned unless all of it is consistent.
    pub fn generate(&mut self, baselines: &[BaselineModel]) -> Result<Vec<ModelResult>> {
        validate_baselines(baselines)?;
        let results: Vec<ModelResult> = baselines
            .iter()
            .map(|baseline| self.generate_model(baseline))
            .collect();
        schema::validate(&results).map_err(ErrorGenerator::InvalidOutput)?;
        Ok(results)
    }

    pub fn generate_model(&mut self, baseline: &BaselineModel) -> ModelResult {
        debug!("Generating {} across {} quant levels", baseline.slug, QuantLevel::ALL.len());
        let quants = QuantLevel::ALL
            .into_iter()
            .map(|level| self.generate_quant(baseline, &QuantProfile::for_level(level)))
            .collect();

        ModelResult {
            slug: baseline.slug.clone(),
            name: baseline.name.clone(),
            params: baseline.params.clone(),
            huggingface: baseline.huggingface.clone(),
            quants,
        }
    }

    fn generate_quant(&mut self, baseline: &BaselineModel, profile: &QuantProfile) -> QuantResult {
        let mut scores = BenchmarkScores::default();
        let mut retention_per_benchmark = BenchmarkScores::default();

        for key in BenchmarkKey::ALL {
            let retention = self.draw_retention(profile);
            retention_per_benchmark.set(key, round_to(retention, VALUE_DECIMALS));
            scores.set(
                key,
                round_to(baseline.fp16_scores.get(key) * retention / 100.0, VALUE_DECIMALS),
            );
        }
        let retention = round_to(retention_per_benchmark.mean(), VALUE_DECIMALS);

        let file_size_gb = round_to(
            baseline.fp16_file_size_gb * profile.size_multiplier * self.noise(SIZE_NOISE),
            SIZE_DECIMALS,
        );
        let vram_gb = round_to(
            baseline.fp16_vram_gb * profile.size_multiplier * self.noise(SIZE_NOISE) * VRAM_OVERHEAD,
            SIZE_DECIMALS,
        );
        let decode_toks_per_sec = round_to(
            baseline.fp16_decode_toks * profile.speed_multiplier * self.noise(SPEED_NOISE),
            VALUE_DECIMALS,
        );
        let prefill_toks_per_sec = round_to(
            baseline.fp16_prefill_toks * profile.speed_multiplier * self.noise(SPEED_NOISE),
            VALUE_DECIMALS,
        );

        QuantResult {
            quant: profile.quant,
            file_size_gb,
            vram_gb,
            decode_toks_per_sec,
            prefill_toks_per_sec,
            scores,
            retention,
            retention_per_benchmark,
        }
    }

    /// FP16 is the reference point and never drawn.
    fn draw_retention(&mut self, profile: &QuantProfile) -> f64 {
        if profile.quant.is_baseline() {
            return 100.0;
        }
        let drawn = profile.retention_mid
            + (self.rng.next_f64() - 0.5) * 2.0 * profile.retention_range;
        let (low, high) = profile.retention_bounds();
        drawn.max(low).min(high)
    }

    fn noise(&mut self, spread: f64) -> f64 {
        1.0 + (self.rng.next_f64() - 0.5) * spread
    }
}
