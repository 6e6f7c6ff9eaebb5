use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("operation cancelled")]
    Cancelled,
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("Unknown order: {0}")]
    UnknownOrder(String),
    #[error("Unknown payment provider: {0}")]
    UnknownProvider(String),
    #[error("Invalid payment state: {0}")]
    InvalidState(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] http::Error),
    #[error("Internal error: {0}")]
    InternalError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

impl PaymentError {
    /// Wraps an implementation-specific failure.
    pub fn internal(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        PaymentError::InternalError(error.into())
    }
}
