//! Error types for menagerie-fetch.

use thiserror::Error;

/// Coarse failure class, for callers that only need to branch on category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad or missing credential.
    Auth,
    /// The API throttled the request.
    RateLimit,
    /// Connection, timeout or body read failure.
    Network,
    /// The response body was not the expected JSON.
    Parse,
    /// Invalid input rejected before any request was made.
    Config,
    /// Any other non-success HTTP status.
    Status,
}

/// All errors that can arise from a fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query term is empty or whitespace.
    #[error("animal name must not be empty")]
    EmptyQuery,

    /// No API key was supplied.
    #[error("API key is empty")]
    MissingApiKey,

    /// The API rejected the credential (HTTP 401/403).
    #[error("API rejected the credential (HTTP {status}); check the API key")]
    Auth { status: u16 },

    /// The API throttled the request (HTTP 429).
    #[error("API rate limit reached{}", retry_hint(.retry_after_secs))]
    RateLimited { retry_after_secs: Option<u64> },

    /// Any other non-2xx response.
    #[error("API returned HTTP {status}")]
    Status { status: u16 },

    /// Connection, DNS, TLS, timeout or body read failure.
    #[error("network error talking to {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Body was not valid JSON.
    #[error("failed to parse animals response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Body was JSON, but not a list of records.
    #[error("unexpected animals response: expected a JSON list, found {found}")]
    UnexpectedPayload { found: &'static str },
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::EmptyQuery | FetchError::MissingApiKey => ErrorKind::Config,
            FetchError::Auth { .. } => ErrorKind::Auth,
            FetchError::RateLimited { .. } => ErrorKind::RateLimit,
            FetchError::Status { .. } => ErrorKind::Status,
            FetchError::Network { .. } => ErrorKind::Network,
            FetchError::Parse(_) | FetchError::UnexpectedPayload { .. } => ErrorKind::Parse,
        }
    }

    /// Worth retrying after a pause. Nothing here retries automatically.
    pub fn is_transient(&self) -> bool {
        matches!(self.kind(), ErrorKind::RateLimit | ErrorKind::Network)
    }
}

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    match retry_after_secs {
        Some(secs) => format!("; retry after {secs}s"),
        None => "; retry later".to_owned(),
    }
}
