use thiserror::Error;

/// Errors that stop the CLI or reject an input line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("input reader failed: {0}")]
    Reader(String),
}
