//! Error types for the cache and the server.

use thiserror::Error;

/// Failure to get a clip onto disk.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("refusing to cache {0:?}: not a plain word")]
    InvalidWord(String),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("tts request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("tts returned {status} for {word:?}")]
    Status {
        word: String,
        status: reqwest::StatusCode,
    },

    #[error("tts returned an empty clip for {0:?}")]
    EmptyBody(String),

    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CacheError {
    /// Transport failures and upstream 5xx are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}

/// Failure to start or run the HTTP server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cache(#[from] CacheError),
}
