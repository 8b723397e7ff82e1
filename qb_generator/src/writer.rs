use crate::error::Result;
use qb_core::types::ModelResult;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pretty-printed document with two-space indentation and no trailing newline.
pub fn to_document(results: &[ModelResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Writes the document next to `path` first and renames it into place, so a
/// reader only ever sees the previous document or the complete new one.
pub fn write_results(path: &Path, results: &[ModelResult]) -> Result<()> {
    let document = to_document(results)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    debug!("Staging results at {}", staging.display());
    if let Err(err) = fs::write(&staging, document) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }
    fs::rename(&staging, path)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("results.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::default_baselines;
    use crate::generate_results;
    use crate::lcg::DEFAULT_SEED;
    use qb_core::data::read_results;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parents_and_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("results.json");
        let results = generate_results(&default_baselines(), DEFAULT_SEED).unwrap();

        write_results(&path, &results).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("data").join("results.json.tmp").exists());
        assert_eq!(read_results(&path).unwrap(), results);
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        let results = generate_results(&default_baselines(), DEFAULT_SEED).unwrap();

        write_results(&path, &results).unwrap();
        let first = fs::read(&path).unwrap();
        write_results(&path, &results).unwrap();
        assert_eq!(first, fs::read(&path).unwrap());
    }

    #[test]
    fn test_document_layout() {
        let results = generate_results(&default_baselines()[..1], DEFAULT_SEED).unwrap();
        let document = to_document(&results).unwrap();
        assert!(document.starts_with("[\n  {\n    \"slug\": \"llama-3.1-8b\""));
        assert!(document.ends_with(']'));
    }

    #[test]
    fn test_default_run_matches_checked_in_document() {
        let results = generate_results(&default_baselines(), DEFAULT_SEED).unwrap();
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/results.json");
        assert_eq!(to_document(&results).unwrap(), fs::read_to_string(path).unwrap());
    }
}
