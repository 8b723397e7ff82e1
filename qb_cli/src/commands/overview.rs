use crate::client::CliClient;
use crate::commands::NO_DATA_MESSAGE;
use crate::error::Result;
use crate::utils::table::render_table;
use qb_core::server::payload::dataset_response::DatasetResponse;
use qb_core::server::payload::overview_response::OverviewResponse;
use qb_core::utils::format::format_percent;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let response = cli_client.get_overview().await?;
    let overview: DatasetResponse<OverviewResponse> = serde_json::from_str(&response)?;
    match overview.into_option() {
        Some(overview) => println!("{}", render(&overview)),
        None => println!("{}", NO_DATA_MESSAGE),
    }
    Ok(())
}

pub fn render(overview: &OverviewResponse) -> String {
    let summary = &overview.summary;
    let header = format!(
        "{} models, {} quant levels, {} benchmarks, {} questions",
        summary.models, summary.quant_levels, summary.benchmarks, summary.total_questions
    );

    let mut headers = vec!["Quant", "QB-Retention"];
    headers.extend(overview.benchmarks.iter().map(|b| b.name.as_str()));

    let rows: Vec<Vec<String>> = overview
        .overall_retention
        .iter()
        .map(|point| {
            let mut row = vec![point.quant.to_string(), format_percent(point.retention, 1)];
            row.extend(overview.benchmarks.iter().map(|section| {
                section
                    .data
                    .iter()
                    .find(|p| p.quant == point.quant)
                    .map(|p| format_percent(p.retention, 1))
                    .unwrap_or_else(|| "-".to_string())
            }));
            row
        })
        .collect();

    format!("{}\n\n{}", header, render_table(&headers, &rows))
}
