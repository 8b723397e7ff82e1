use crate::client::CliClient;
use crate::commands::NO_DATA_MESSAGE;
use crate::error::Result;
use crate::utils::table::render_table;
use qb_core::data::RetentionPoint;
use qb_core::server::payload::dataset_response::DatasetResponse;
use qb_core::types::BenchmarkKey;
use qb_core::utils::format::format_percent;

pub async fn handle(cli_client: &CliClient, benchmark: Option<BenchmarkKey>) -> Result<()> {
    let response = cli_client.get_retention(benchmark).await?;
    let points: DatasetResponse<Vec<RetentionPoint>> = serde_json::from_str(&response)?;
    match points.into_option() {
        Some(points) => println!("{}", render(&points, benchmark)),
        None => println!("{}", NO_DATA_MESSAGE),
    }
    Ok(())
}

pub fn render(points: &[RetentionPoint], benchmark: Option<BenchmarkKey>) -> String {
    let title = match benchmark {
        Some(key) => format!("{} retention ({})", key.name(), key.description()),
        None => "QB-Retention, averaged over all models".to_string(),
    };
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| vec![p.quant.to_string(), format_percent(p.retention, 1)])
        .collect();
    format!("{}\n\n{}", title, render_table(&["Quant", "Retention"], &rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sample_results;
    use qb_core::data::{compute_benchmark_retention, compute_overall_retention};

    #[test]
    fn test_render_overall() {
        let points = compute_overall_retention(&sample_results());
        let text = render(&points, None);
        assert!(text.starts_with("QB-Retention"));
        assert!(text.contains("FP16"));
        assert_eq!(text.lines().count(), 2 + 2 + 8);
    }

    #[test]
    fn test_render_benchmark() {
        let points = compute_benchmark_retention(&sample_results(), BenchmarkKey::Gpqa);
        let text = render(&points, Some(BenchmarkKey::Gpqa));
        assert!(text.starts_with("GPQA Diamond retention (Graduate-level science)"));
        assert!(text.lines().last().unwrap().starts_with("IQ1_S"));
    }
}
