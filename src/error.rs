//! Error types.
//!
//! [`FetchError`] covers everything that can go wrong between issuing the
//! headline request and holding a list of [`Article`](crate::source::Article)s.
//! [`ConfigError`] is raised at startup, before the terminal is touched, so
//! the process fails fast with a readable message.

use std::time::Duration;

use thiserror::Error;

/// Failure while fetching or decoding headlines.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The API reported an error in the body, with whatever status it sent.
    #[error("news API error ({code}): {message}")]
    Api { code: String, message: String },

    /// Connection, TLS or body-read failure.
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not the JSON shape we expect.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Classify a `reqwest` error, separating timeouts from other transport
    /// failures.  Status codes are checked by the caller, which still needs
    /// the body.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else {
            FetchError::Transport(err)
        }
    }
}

/// Invalid or missing startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: pass --api-key or set NEWS_API_KEY")]
    MissingApiKey,

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
