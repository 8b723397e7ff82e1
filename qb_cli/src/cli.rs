use clap::Parser;
use clap::Subcommand;
use qb_core::export::ExportFormat;
use qb_core::server::default_config::DEFAULT_SERVER_BACKEND_URL;
use qb_core::types::{BenchmarkKey, QuantLevel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the results backend.
    #[arg(long, global = true, default_value = DEFAULT_SERVER_BACKEND_URL)]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dataset summary, average retention and per-benchmark breakdown.
    Overview,
    /// Average retention per quant level, overall or for one benchmark.
    Retention {
        #[arg(short, long)]
        benchmark: Option<BenchmarkKey>,
    },
    /// Models ranked overall, or at one quant level.
    Ranking {
        #[arg(short, long)]
        quant: Option<QuantLevel>,
    },
    #[command(subcommand)]
    Model(ModelCommands),
}

#[derive(Subcommand, Debug)]
pub enum ModelCommands {
    List,
    Show {
        #[arg()]
        slug: String,
    },
    Export {
        #[arg()]
        slug: String,
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
        /// Defaults to the file name suggested by the server.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
