pub mod model;
pub mod overview;
pub mod ranking;
pub mod retention;

pub const NO_DATA_MESSAGE: &str =
    "No benchmark data available. Run generate-sample-data and restart the server.";

#[cfg(test)]
pub(crate) fn sample_results() -> Vec<qb_core::types::ModelResult> {
    use qb_generator::baseline::default_baselines;
    use qb_generator::lcg::DEFAULT_SEED;
    qb_generator::generate_results(&default_baselines(), DEFAULT_SEED).unwrap()
}
