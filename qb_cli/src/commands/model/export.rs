use crate::client::CliClient;
use crate::error::Result;
use qb_core::export::ExportFormat;
use std::fs;
use std::path::{Path, PathBuf};

pub async fn handle(
    cli_client: &CliClient,
    slug: &str,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let download = cli_client.export_model(slug, format).await?;
    let path = output_path(output, download.file_name, slug, format);
    fs::write(&path, download.body)?;
    println!("Saved {} export of {} to {}", format, slug, path.display());
    Ok(())
}

/// Explicit output wins, then the file-name part of the server's suggestion,
/// then `<slug>-benchmarks.<ext>`. The suggestion never contributes directories.
fn output_path(
    output: Option<PathBuf>,
    suggested: Option<String>,
    slug: &str,
    format: ExportFormat,
) -> PathBuf {
    output
        .or_else(|| {
            suggested
                .as_deref()
                .and_then(|name| Path::new(name).file_name())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(format!("{}-benchmarks.{}", slug, format.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_precedence() {
        let explicit = output_path(
            Some(PathBuf::from("out.csv")),
            Some("phi-4-benchmarks.csv".to_string()),
            "phi-4",
            ExportFormat::Csv,
        );
        assert_eq!(explicit, PathBuf::from("out.csv"));

        let suggested = output_path(
            None,
            Some("phi-4-benchmarks.csv".to_string()),
            "phi-4",
            ExportFormat::Csv,
        );
        assert_eq!(suggested, PathBuf::from("phi-4-benchmarks.csv"));

        let fallback = output_path(None, None, "phi-4", ExportFormat::Json);
        assert_eq!(fallback, PathBuf::from("phi-4-benchmarks.json"));
    }

    #[test]
    fn test_suggested_name_cannot_leave_working_directory() {
        let traversal = output_path(
            None,
            Some("../../tmp/evil-benchmarks.csv".to_string()),
            "x",
            ExportFormat::Csv,
        );
        assert_eq!(traversal, PathBuf::from("evil-benchmarks.csv"));

        let absolute = output_path(
            None,
            Some("/etc/passwd".to_string()),
            "x",
            ExportFormat::Csv,
        );
        assert_eq!(absolute, PathBuf::from("passwd"));

        let nothing_left = output_path(None, Some("..".to_string()), "x", ExportFormat::Csv);
        assert_eq!(nothing_left, PathBuf::from("x-benchmarks.csv"));
    }
}
