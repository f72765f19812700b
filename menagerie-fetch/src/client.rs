//! Blocking HTTP client for the animals lookup API.
//!
//! One call to [`Fetcher::fetch`] issues exactly one GET:
//!
//! ```text
//! GET <endpoint>?name=<query>
//! X-Api-Key: <key>
//! ```
//!
//! Nothing is retried. Status mapping:
//!
//! | Outcome               | Result                        |
//! |-----------------------|-------------------------------|
//! | 2xx + JSON list       | `Ok(records)` (may be empty)  |
//! | 401, 403              | [`FetchError::Auth`]          |
//! | 429                   | [`FetchError::RateLimited`]   |
//! | other non-2xx         | [`FetchError::Status`]        |
//! | connect/timeout/read  | [`FetchError::Network`]       |
//! | bad body              | [`FetchError::Parse`] / [`FetchError::UnexpectedPayload`] |

use menagerie_core::{ApiConfig, QueryResult, QueryTerm};

use crate::decode::decode_records;
use crate::error::FetchError;

const USER_AGENT: &str = concat!("menagerie/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Reusable client bound to one [`ApiConfig`].
pub struct Fetcher {
    agent: ureq::Agent,
    config: ApiConfig,
}

impl Fetcher {
    /// Build an agent honouring `config.timeout` for the whole request.
    pub fn new(config: ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build();
        Fetcher { agent, config }
    }

    /// Look up animals matching `query`.
    ///
    /// The query is sent verbatim; blank queries and empty keys are rejected
    /// before any I/O.
    pub fn fetch(&self, query: &QueryTerm) -> Result<QueryResult, FetchError> {
        if query.is_blank() {
            return Err(FetchError::EmptyQuery);
        }
        if self.config.api_key.is_empty() {
            return Err(FetchError::MissingApiKey);
        }

        let url = self.config.endpoint.as_str();
        tracing::debug!(%url, query = %query, timeout = ?self.config.timeout, "fetching animals");

        let response = self
            .agent
            .get(url)
            .set(API_KEY_HEADER, self.config.api_key.expose())
            .query("name", query.as_str())
            .call();

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                return Err(status_error(status, &response));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(FetchError::Network {
                    url: url.to_owned(),
                    source: Box::new(transport),
                });
            }
        };

        let body = response.into_string().map_err(|e| FetchError::Network {
            url: url.to_owned(),
            source: Box::new(e),
        })?;
        let records = decode_records(&body)?;
        tracing::info!(query = %query, count = records.len(), "fetched animals");
        Ok(records)
    }
}

/// One-shot fetch with a throwaway [`Fetcher`].
pub fn fetch(query: &QueryTerm, config: &ApiConfig) -> Result<QueryResult, FetchError> {
    Fetcher::new(config.clone()).fetch(query)
}

fn status_error(status: u16, response: &ureq::Response) -> FetchError {
    tracing::debug!(status, "animals API returned an error status");
    match status {
        401 | 403 => FetchError::Auth { status },
        429 => FetchError::RateLimited {
            retry_after_secs: response
                .header("Retry-After")
                .and_then(|v| v.trim().parse().ok()),
        },
        _ => FetchError::Status { status },
    }
}
