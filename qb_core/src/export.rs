use crate::error::{ErrorCore, Result};
use crate::types::QuantResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;

const CSV_HEADERS: [&str; 11] = [
    "Quant",
    "File Size (GB)",
    "VRAM (GB)",
    "QB-Retention (%)",
    "IFEval",
    "BBH",
    "GPQA",
    "MuSR",
    "HLE",
    "Decode tok/s",
    "Prefill tok/s",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ErrorCore;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ErrorCore::UnknownExportFormat(other.to_string())),
        }
    }
}

/// Renders a model's quant results in the requested format.
pub fn render(quants: &[QuantResult], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(quants),
        ExportFormat::Csv => to_csv(quants),
    }
}

pub fn to_json(quants: &[QuantResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(quants)?)
}

/// One header record and one record per quant, newline-terminated except the last.
pub fn to_csv(quants: &[QuantResult]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for q in quants {
        writer.write_record([
            q.quant.to_string(),
            q.file_size_gb.to_string(),
            q.vram_gb.to_string(),
            q.retention.to_string(),
            q.scores.ifeval.to_string(),
            q.scores.bbh.to_string(),
            q.scores.gpqa.to_string(),
            q.scores.musr.to_string(),
            q.scores.hle.to_string(),
            q.decode_toks_per_sec.to_string(),
            q.prefill_toks_per_sec.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut text = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Lowercased name with every whitespace run replaced by `-`, leading and
/// trailing runs included.
///
/// `Llama 3.1 8B Instruct` -> `llama-3.1-8b-instruct-benchmarks.csv`
pub fn export_file_name(model_name: &str, format: ExportFormat) -> String {
    let mut stem = String::with_capacity(model_name.len());
    let mut in_whitespace = false;
    for c in model_name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('-');
            }
            in_whitespace = true;
        } else {
            stem.push(c);
            in_whitespace = false;
        }
    }
    format!("{stem}-benchmarks.{}", format.extension())
}
