use crate::client::CliClient;
use crate::commands::NO_DATA_MESSAGE;
use crate::error::Result;
use crate::utils::table::render_table;
use qb_core::data::{ModelRanking, QuantRankingEntry};
use qb_core::server::payload::dataset_response::DatasetResponse;
use qb_core::types::QuantLevel;
use qb_core::utils::format::format_percent;
use qb_core::utils::math::mean;

pub async fn handle(cli_client: &CliClient, quant: Option<QuantLevel>) -> Result<()> {
    let response = cli_client.get_ranking(quant).await?;
    let text = match quant {
        Some(level) => {
            let entries: DatasetResponse<Vec<QuantRankingEntry>> =
                serde_json::from_str(&response)?;
            entries
                .into_option()
                .map(|entries| render_quant_ranking(&entries, level))
        }
        None => {
            let rankings: DatasetResponse<Vec<ModelRanking>> = serde_json::from_str(&response)?;
            rankings
                .into_option()
                .map(|rankings| render_model_ranking(&rankings))
        }
    };
    println!("{}", text.as_deref().unwrap_or(NO_DATA_MESSAGE));
    Ok(())
}

pub fn render_model_ranking(rankings: &[ModelRanking]) -> String {
    let mut headers = vec!["#", "Model", "Mean"];
    if let Some(first) = rankings.first() {
        headers.extend(first.quants.iter().map(|p| p.quant.as_str()));
    }
    let rows: Vec<Vec<String>> = rankings
        .iter()
        .enumerate()
        .map(|(i, ranking)| {
            let retentions: Vec<f64> = ranking.quants.iter().map(|p| p.retention).collect();
            let mut row = vec![
                (i + 1).to_string(),
                ranking.model_name.clone(),
                mean(&retentions)
                    .map(|m| format_percent(m, 1))
                    .unwrap_or_else(|| "-".to_string()),
            ];
            row.extend(retentions.iter().map(|r| format_percent(*r, 1)));
            row
        })
        .collect();
    render_table(&headers, &rows)
}

pub fn render_quant_ranking(entries: &[QuantRankingEntry], quant: QuantLevel) -> String {
    if entries.is_empty() {
        return format!("No model reports results for {}.", quant);
    }
    let rows: Vec<Vec<String>> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            vec![
                (i + 1).to_string(),
                entry.model_name.clone(),
                format_percent(entry.retention, 1),
            ]
        })
        .collect();
    format!(
        "Ranking at {}\n\n{}",
        quant,
        render_table(&["#", "Model", "Retention"], &rows)
    )
}
