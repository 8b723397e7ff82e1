use crate::error::Result;
use crate::schema;
use crate::server::default_config::{DEFAULT_RESULTS_PATH, RESULTS_PATH_ENV};
use crate::types::ModelResult;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Read-only handle over the persisted results document.
///
/// Built once at process start and shared (usually behind an `Arc`) with
/// everything that renders data. The first successful load is stored in a
/// write-once cell; every later call borrows that same dataset without
/// touching the filesystem. A failed load is reported and yields an empty
/// slice, and is retried on the next call.
#[derive(Debug)]
pub struct ResultsStore {
    path: PathBuf,
    results: OnceLock<Vec<ModelResult>>,
}

impl ResultsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ResultsStore {
            path: path.into(),
            results: OnceLock::new(),
        }
    }

    /// Uses `QB_RESULTS_PATH`, or `data/results.json` when unset.
    pub fn from_env() -> Self {
        let path = env::var(RESULTS_PATH_ENV).unwrap_or(String::from(DEFAULT_RESULTS_PATH));
        ResultsStore::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.results.get().is_some()
    }

    /// The validated dataset, or an empty slice when the document is missing,
    /// malformed or fails validation. Never fails.
    pub fn load_results(&self) -> &[ModelResult] {
        if let Some(results) = self.results.get() {
            return results;
        }

        match read_results(&self.path) {
            Ok(results) => {
                info!(
                    "Loaded {} models from {}",
                    results.len(),
                    self.path.display()
                );
                // another caller may have won the race, in which case its value is kept
                self.results.get_or_init(|| results).as_slice()
            }
            Err(err) => {
                warn!(
                    "Failed to load {}: {}. Run `generate-sample-data` to create it.",
                    self.path.display(),
                    err
                );
                &[]
            }
        }
    }

    /// Exact slug match; `None` when the model is unknown or nothing is loaded.
    pub fn load_model_by_slug(&self, slug: &str) -> Option<&ModelResult> {
        let model = self.load_results().iter().find(|m| m.slug == slug);
        if model.is_none() {
            debug!("No model with slug {slug}");
        }
        model
    }
}

/// Reads, parses and validates a results document.
pub fn read_results(path: &Path) -> Result<Vec<ModelResult>> {
    let raw = fs::read_to_string(path)?;
    let results: Vec<ModelResult> = serde_json::from_str(&raw)?;
    schema::validate(&results)?;
    Ok(results)
}
