//! Custom error types for the application
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A connection-table address token was not well-formed packed hex.
    /// Rows carrying one are skipped by the table reader; the variant is
    /// surfaced directly only by the address codec itself.
    #[error("malformed address token: {0}")]
    MalformedAddress(String),

    /// The target process's fd directory does not exist. The one fatal
    /// condition in the tool.
    #[error("process {0} not found")]
    ProcessNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV into_inner error: {0}")]
    CsvIntoInner(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),

    #[error("UTF-8 conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}
