//! HTTP client for the Windsor.ai connector API.
//!
//! One GET per logical query: the tenant credential, the `date_preset`, and a
//! domain-specific `fields` list travel as query parameters. Non-2xx statuses,
//! transport failures, and undecodable bodies all surface as
//! [`WindsorError`]; there is no retry here.

use std::time::Duration;

use adsdash_core::{AppConfig, DateRange};
use reqwest::{Client, Url};

use crate::error::WindsorError;
use crate::types::{DataEnvelope, Domain, RawRow};

pub const DEFAULT_BASE_URL: &str = "https://connectors.windsor.ai/all";
const DEFAULT_USER_AGENT: &str = "adsdash/0.1 (ads-analytics)";

/// Client for the Windsor connector endpoint.
///
/// Holds no tenant state: the credential is passed per call so one client can
/// serve every project. Use [`WindsorClient::with_base_url`] to point at a
/// mock server in tests.
#[derive(Debug, Clone)]
pub struct WindsorClient {
    client: Client,
    base_url: Url,
}

impl WindsorClient {
    /// Creates a client pointed at the production connector endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WindsorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, WindsorError> {
        Self::with_base_url(timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WindsorError::InvalidBaseUrl`] if the configured endpoint is
    /// not a URL, or [`WindsorError::Http`] if the HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, WindsorError> {
        Self::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.windsor_base_url,
        )
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`WindsorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`WindsorError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, WindsorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| WindsorError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the raw rows for one domain query.
    ///
    /// A missing or blank `credential` returns an empty row set without any
    /// network access. Rows that are not JSON objects are skipped.
    ///
    /// # Errors
    ///
    /// - [`WindsorError::Http`] on network failure or timeout.
    /// - [`WindsorError::UnexpectedStatus`] on a non-2xx response.
    /// - [`WindsorError::Deserialize`] if the body is not JSON.
    /// - [`WindsorError::MissingData`] if the body has no `data` array.
    pub async fn fetch_rows(
        &self,
        domain: Domain,
        credential: Option<&str>,
        range: DateRange,
    ) -> Result<Vec<RawRow>, WindsorError> {
        let Some(api_key) = credential.map(str::trim).filter(|k| !k.is_empty()) else {
            tracing::debug!(%domain, "no credential configured, skipping connector request");
            return Ok(Vec::new());
        };

        let url = self.build_url(api_key, domain, range);
        let body = self.request_body(&url, domain).await?;

        let envelope: DataEnvelope =
            serde_json::from_str(&body).map_err(|e| WindsorError::Deserialize {
                context: format!("{domain} query ({range})"),
                source: e,
            })?;
        let values = envelope.data.ok_or(WindsorError::MissingData { domain })?;

        let total = values.len();
        let rows: Vec<RawRow> = values.into_iter().filter_map(RawRow::from_value).collect();
        if rows.len() != total {
            tracing::warn!(
                %domain,
                skipped = total - rows.len(),
                "connector returned non-object rows; skipping them"
            );
        }
        tracing::debug!(%domain, rows = rows.len(), "fetched connector rows");

        Ok(rows)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, api_key: &str, domain: Domain, range: DateRange) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", api_key);
            pairs.append_pair("date_preset", range.as_preset());
            pairs.append_pair("fields", domain.fields());
        }
        url
    }

    /// Sends the GET and returns the body text of a 2xx response.
    ///
    /// The request URL carries the tenant credential, so it is stripped from
    /// transport errors before they can reach a log line.
    async fn request_body(&self, url: &Url, domain: Domain) -> Result<String, WindsorError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WindsorError::UnexpectedStatus {
                domain,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| WindsorError::Http(e.without_url()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
