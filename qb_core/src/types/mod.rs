pub mod benchmark;
pub mod model_result;
pub mod quant;

pub use benchmark::{BenchmarkKey, BenchmarkScores};
pub use model_result::{ModelResult, QuantResult};
pub use quant::QuantLevel;
