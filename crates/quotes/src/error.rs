//! Error types for the quote cache

use thiserror::Error;

pub type QuoteResult<T> = Result<T, QuoteError>;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source answered but gave nothing usable
    #[error("Quote unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Store(String),
}
