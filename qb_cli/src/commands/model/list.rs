use crate::client::CliClient;
use crate::commands::NO_DATA_MESSAGE;
use crate::error::Result;
use crate::utils::table::render_table;
use qb_core::data::ModelCard;
use qb_core::server::payload::dataset_response::DatasetResponse;
use qb_core::utils::format::format_percent;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let response = cli_client.list_models().await?;
    let cards: DatasetResponse<Vec<ModelCard>> = serde_json::from_str(&response)?;
    match cards.into_option() {
        Some(cards) => println!("{}", render(&cards)),
        None => println!("{}", NO_DATA_MESSAGE),
    }
    Ok(())
}

pub fn render(cards: &[ModelCard]) -> String {
    let rows: Vec<Vec<String>> = cards
        .iter()
        .map(|card| {
            vec![
                card.slug.clone(),
                card.name.clone(),
                card.params.clone(),
                format_percent(card.q4_retention, 1),
            ]
        })
        .collect();
    render_table(&["Slug", "Model", "Params", "Q4_K_M"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sample_results;
    use qb_core::data::model_cards;

    #[test]
    fn test_render_cards() {
        let cards = model_cards(&sample_results());
        let text = render(&cards);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[2].starts_with("llama-3.1-8b"));
        assert!(lines[6].starts_with("phi-4"));
        assert!(lines[6].contains("14B"));
    }
}
