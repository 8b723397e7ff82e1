use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error(transparent)]
    Core(#[from] qb_core::error::ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse server response: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Could not connect to server at {0}, is it running?")]
    ConnectionRefused(String),

    #[error("Server answered {status}: {message}")]
    Api { status: u16, message: String },
}
