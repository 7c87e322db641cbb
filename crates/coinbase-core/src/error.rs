use thiserror::Error;

/// Result type alias for Coinbase operations
pub type Result<T> = std::result::Result<T, CoinbaseError>;

/// Errors that can occur when configuring or using the Coinbase client
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// Certificate file missing or unreadable
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Certificate bundle yielded no usable root certificates
    #[error("certificate error: {0}")]
    Certificate(String),

    /// HTTP client construction or transport failure
    #[error("HTTP error: {0}")]
    Http(String),
}

impl CoinbaseError {
    /// Returns true if the error came from reading the certificate file
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
