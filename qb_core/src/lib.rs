pub mod data;
pub mod error;
pub mod export;
pub mod logger;
pub mod schema;
pub mod server;
pub mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_helpers;
