pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";
pub const DEFAULT_SERVER_BACKEND_URL: &str = "http://localhost:3000";

pub const RESULTS_PATH_ENV: &str = "QB_RESULTS_PATH";
pub const DEFAULT_RESULTS_PATH: &str = "data/results.json";
