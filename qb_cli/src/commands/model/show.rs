use crate::client::CliClient;
use crate::error::Result;
use crate::utils::table::render_table;
use qb_core::types::{BenchmarkKey, ModelResult};
use qb_core::utils::format::{
    format_file_size, format_number, format_percent, format_speed, format_vram,
};

pub async fn handle(cli_client: &CliClient, slug: &str) -> Result<()> {
    let response = cli_client.get_model(slug).await?;
    let model: ModelResult = serde_json::from_str(&response)?;
    println!("{}", render(&model));
    Ok(())
}

pub fn render(model: &ModelResult) -> String {
    let mut headers = vec!["Quant", "File Size", "VRAM", "QB-Retention"];
    headers.extend(BenchmarkKey::ALL.iter().map(|key| key.name()));
    headers.extend(["Decode", "Prefill"]);

    let rows: Vec<Vec<String>> = model
        .quants
        .iter()
        .map(|q| {
            let mut row = vec![
                q.quant.to_string(),
                format_file_size(q.file_size_gb),
                format_vram(q.vram_gb),
                format_percent(q.retention, 1),
            ];
            row.extend(q.scores.iter().map(|(_, score)| format_number(score, 1)));
            row.push(format_speed(q.decode_toks_per_sec));
            row.push(format!("{} tok/s", format_number(q.prefill_toks_per_sec, 0)));
            row
        })
        .collect();

    format!(
        "{} ({})\n{}\n\n{}",
        model.name,
        model.params,
        model.huggingface,
        render_table(&headers, &rows)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sample_results;

    #[test]
    fn test_render_model() {
        let results = sample_results();
        let text = render(&results[4]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Phi-4 (14B)");
        assert_eq!(lines[1], "https://huggingface.co/microsoft/phi-4");
        assert!(lines[3].starts_with("Quant"));
        assert!(lines[3].contains("GPQA"));
        assert!(lines[5].starts_with("FP16"));
        assert!(lines[5].contains("100.0%"));
        assert!(lines[5].contains(" GB"));
        assert!(lines[5].ends_with("tok/s"));
        assert_eq!(lines.len(), 3 + 2 + 8);
    }
}
