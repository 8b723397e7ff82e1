pub mod baseline;
pub mod error;
pub mod generator;
pub mod lcg;
pub mod profile;
pub mod writer;

use crate::baseline::BaselineModel;
use crate::error::Result;
use crate::generator::Generator;
use crate::lcg::ParkMiller;
use qb_core::types::ModelResult;

/// Full dataset for `baselines`, reproducible for a given seed.
pub fn generate_results(baselines: &[BaselineModel], seed: u64) -> Result<Vec<ModelResult>> {
    let rng = ParkMiller::new(seed)?;
    Generator::new(rng).generate(baselines)
}
