//! Error types for the case feed

use std::time::Duration;
use thiserror::Error;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while fetching the case series
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FeedError {
    /// Short, stable label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Timeout(_) => "timeout",
            FeedError::Http { .. } => "http",
            FeedError::UnexpectedShape(_) => "unexpected_shape",
            FeedError::Transport(_) => "transport",
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::UnexpectedShape(err.to_string())
    }
}
