use crate::cli::{Cli, Commands, ModelCommands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
mod cli;
mod client;
mod commands;
mod error;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.server);

    match cli.command {
        Commands::Overview => commands::overview::handle(&cli_client).await?,
        Commands::Retention { benchmark } => {
            commands::retention::handle(&cli_client, benchmark).await?
        }
        Commands::Ranking { quant } => commands::ranking::handle(&cli_client, quant).await?,
        Commands::Model(model_commands) => match model_commands {
            ModelCommands::List => commands::model::list::handle(&cli_client).await?,
            ModelCommands::Show { slug } => {
                commands::model::show::handle(&cli_client, &slug).await?
            }
            ModelCommands::Export {
                slug,
                format,
                output,
            } => commands::model::export::handle(&cli_client, &slug, format, output).await?,
        },
    }

    Ok(())
}
