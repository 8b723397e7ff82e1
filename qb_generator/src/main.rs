use clap::Parser;
use qb_core::logger::init_tracing;
use qb_core::server::default_config::DEFAULT_RESULTS_PATH;
use qb_generator::baseline::{default_baselines, load_baselines};
use qb_generator::error::Result;
use qb_generator::generate_results;
use qb_generator::lcg::DEFAULT_SEED;
use qb_generator::writer::write_results;
use std::path::PathBuf;
use tracing::{error, info};

/// Generates the sample quantization benchmark results document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to write the results document.
    #[arg(short, long, default_value = DEFAULT_RESULTS_PATH)]
    output: PathBuf,

    /// Seed for the pseudo-random generator.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// JSON file of FP16 baselines replacing the built-in models.
    #[arg(short, long)]
    baseline: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let baselines = match &args.baseline {
        Some(path) => load_baselines(path)?,
        None => default_baselines(),
    };

    let results = generate_results(&baselines, args.seed)?;
    write_results(&args.output, &results)?;

    info!(
        "Generated data for {} models at {}",
        results.len(),
        args.output.display()
    );
    let names: Vec<&str> = results.iter().map(|m| m.name.as_str()).collect();
    info!("Models: {}", names.join(", "));
    if let Some(first) = results.first() {
        let levels: Vec<&str> = first.quants.iter().map(|q| q.quant.as_str()).collect();
        info!("Quant levels per model: {}", levels.join(", "));
    }
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run(Args::parse()) {
        error!("Generation aborted: {e}");
        std::process::exit(1);
    }
}
