use thiserror::Error;

use crate::types::Domain;

/// Errors returned by the Windsor connector client.
///
/// Every variant is the same failure class to dashboard callers: the domain
/// fetch failed and resolves to its fallback. The variants exist for logging.
#[derive(Debug, Error)]
pub enum WindsorError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The connector answered with a non-2xx status.
    #[error("unexpected HTTP status {status} for {domain} query")]
    UnexpectedStatus { domain: Domain, status: u16 },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but carried no `data` array.
    #[error("response for {domain} query has no data array")]
    MissingData { domain: Domain },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
