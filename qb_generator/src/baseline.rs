use crate::error::{ErrorGenerator, Result};
use qb_core::types::BenchmarkScores;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Unquantized reference characteristics of one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineModel {
    pub slug: String,
    pub name: String,
    pub params: String,
    pub huggingface: String,
    pub fp16_scores: BenchmarkScores,
    pub fp16_file_size_gb: f64,
    pub fp16_vram_gb: f64,
    pub fp16_decode_toks: f64,
    pub fp16_prefill_toks: f64,
}

impl BaselineModel {
    fn invalid(&self, reason: impl Into<String>) -> ErrorGenerator {
        ErrorGenerator::InvalidBaseline {
            slug: self.slug.clone(),
            reason: reason.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.slug.trim().is_empty() {
            return Err(self.invalid("slug must not be empty"));
        }
        for (key, score) in self.fp16_scores.iter() {
            if !(score.is_finite() && (0.0..=100.0).contains(&score)) {
                return Err(self.invalid(format!("{key} score {score} is outside [0, 100]")));
            }
        }
        let quantities = [
            ("fp16FileSizeGb", self.fp16_file_size_gb),
            ("fp16VramGb", self.fp16_vram_gb),
            ("fp16DecodeToks", self.fp16_decode_toks),
            ("fp16PrefillToks", self.fp16_prefill_toks),
        ];
        for (field, value) in quantities {
            if !(value.is_finite() && value > 0.0) {
                return Err(self.invalid(format!("{field} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}

/// Rejects configurations that could only produce an inconsistent document.
pub fn validate_baselines(baselines: &[BaselineModel]) -> Result<()> {
    if baselines.is_empty() {
        return Err(ErrorGenerator::EmptyBaseline);
    }
    let mut slugs = HashSet::with_capacity(baselines.len());
    for baseline in baselines {
        baseline.validate()?;
        if !slugs.insert(baseline.slug.as_str()) {
            return Err(baseline.invalid("duplicate slug"));
        }
    }
    Ok(())
}

/// Reads a JSON array of baselines and validates it.
pub fn load_baselines(path: &Path) -> Result<Vec<BaselineModel>> {
    debug!("Reading baseline configuration from {}", path.display());
    let data = fs::read_to_string(path)?;
    let baselines: Vec<BaselineModel> = serde_json::from_str(&data)?;
    validate_baselines(&baselines)?;
    Ok(baselines)
}

fn baseline(
    slug: &str,
    name: &str,
    params: &str,
    huggingface: &str,
    scores: [f64; 5],
    sizes: (f64, f64),
    speeds: (f64, f64),
) -> BaselineModel {
    let [ifeval, bbh, gpqa, musr, hle] = scores;
    BaselineModel {
        slug: slug.to_string(),
        name: name.to_string(),
        params: params.to_string(),
        huggingface: huggingface.to_string(),
        fp16_scores: BenchmarkScores {
            ifeval,
            bbh,
            gpqa,
            musr,
            hle,
        },
        fp16_file_size_gb: sizes.0,
        fp16_vram_gb: sizes.1,
        fp16_decode_toks: speeds.0,
        fp16_prefill_toks: speeds.1,
    }
}

/// The five models the sample dataset is built from.
pub fn default_baselines() -> Vec<BaselineModel> {
    vec![
        baseline(
            "llama-3.1-8b",
            "Llama 3.1 8B Instruct",
            "8B",
            "https://huggingface.co/meta-llama/Llama-3.1-8B-Instruct",
            [72.0, 67.0, 31.0, 40.0, 5.0],
            (16.1, 17.2),
            (28.0, 1200.0),
        ),
        baseline(
            "qwen-2.5-7b",
            "Qwen 2.5 7B Instruct",
            "7B",
            "https://huggingface.co/Qwen/Qwen2.5-7B-Instruct",
            [75.0, 65.0, 33.0, 38.0, 7.0],
            (14.2, 15.3),
            (32.0, 1350.0),
        ),
        baseline(
            "mistral-7b-v0.3",
            "Mistral 7B v0.3 Instruct",
            "7B",
            "https://huggingface.co/mistralai/Mistral-7B-Instruct-v0.3",
            [60.0, 58.0, 28.0, 35.0, 3.0],
            (14.5, 15.6),
            (30.0, 1280.0),
        ),
        baseline(
            "gemma-2-9b",
            "Gemma 2 9B Instruct",
            "9B",
            "https://huggingface.co/google/gemma-2-9b-it",
            [71.0, 72.0, 35.0, 43.0, 6.0],
            (18.5, 19.8),
            (25.0, 1100.0),
        ),
        baseline(
            "phi-4",
            "Phi-4",
            "14B",
            "https://huggingface.co/microsoft/phi-4",
            [78.0, 78.0, 42.0, 48.0, 10.0],
            (28.0, 29.5),
            (18.0, 850.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_baselines_are_valid() {
        let baselines = default_baselines();
        assert_eq!(baselines.len(), 5);
        assert!(validate_baselines(&baselines).is_ok());
        assert_eq!(baselines[0].fp16_scores.ifeval, 72.0);
    }

    #[test]
    fn test_rejects_empty_and_out_of_range() {
        assert!(matches!(
            validate_baselines(&[]),
            Err(ErrorGenerator::EmptyBaseline)
        ));

        let mut baselines = default_baselines();
        baselines[2].fp16_scores.gpqa = 120.0;
        assert!(matches!(
            validate_baselines(&baselines),
            Err(ErrorGenerator::InvalidBaseline { slug, .. }) if slug == "mistral-7b-v0.3"
        ));

        let mut baselines = default_baselines();
        baselines[0].fp16_vram_gb = 0.0;
        assert!(validate_baselines(&baselines).is_err());
    }

    #[test]
    fn test_rejects_duplicate_slug() {
        let mut baselines = default_baselines();
        let taken = baselines[0].slug.clone();
        baselines[4].slug = taken;
        assert!(matches!(
            validate_baselines(&baselines),
            Err(ErrorGenerator::InvalidBaseline { reason, .. }) if reason == "duplicate slug"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&default_baselines()[..2]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_baselines(file.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].slug, "qwen-2.5-7b");
        assert!(json.contains("fp16FileSizeGb"));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"slug\": \"x\"}]").unwrap();
        assert!(matches!(
            load_baselines(file.path()),
            Err(ErrorGenerator::JsonError(_))
        ));
    }
}
