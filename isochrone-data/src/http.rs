//! HTTP plumbing shared by the routing and isoline providers.

use std::time::Duration;

use isochrone_core::ProviderError;
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Default user agent for provider requests.
pub const DEFAULT_USER_AGENT: &str = "isochrone-engine/0.1";

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while constructing an HTTP provider.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
}

/// Build a client applying `timeout` to both connection and whole request.
pub(crate) fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, ProviderBuildError> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(ProviderBuildError::HttpClient)
}

/// Parse `base_url` after dropping trailing slashes.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ProviderBuildError> {
    let trimmed = base_url.trim_end_matches('/');
    Url::parse(trimmed).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}

/// Map a transport failure onto [`ProviderError`].
pub(crate) fn convert_reqwest_error(
    error: &reqwest::Error,
    url: &str,
    timeout: Duration,
) -> ProviderError {
    if error.is_timeout() {
        return ProviderError::Timeout {
            url: url.to_owned(),
            timeout_secs: timeout.as_secs(),
        };
    }

    if let Some(status) = error.status() {
        return ProviderError::HttpError {
            url: url.to_owned(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }

    ProviderError::NetworkError {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

/// GET `url` and deserialise a JSON body.
pub(crate) async fn get_json<T>(client: &Client, url: &Url, timeout: Duration) -> Result<T, ProviderError>
where
    T: serde::de::DeserializeOwned,
{
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|err| convert_reqwest_error(&err, url.as_str(), timeout))?
        .error_for_status()
        .map_err(|err| convert_reqwest_error(&err, url.as_str(), timeout))?;

    response
        .json()
        .await
        .map_err(|err| ProviderError::ParseError {
            message: err.to_string(),
        })
}
