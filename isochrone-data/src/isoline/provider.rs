//! `IsolineProvider` backed by a flexible-polyline isoline API.

use std::time::Duration;

use async_trait::async_trait;
use isochrone_core::polyline::decode;
use isochrone_core::{IsolineProvider, IsolineRequest, ProviderError, Ring, TravelMode};
use log::debug;
use reqwest::Client;
use url::Url;

use crate::http::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ProviderBuildError, build_client, get_json,
    parse_base_url,
};

use super::response::IsolineResponse;

/// Default isoline service endpoint.
pub const DEFAULT_ISOLINE_BASE_URL: &str = "https://isoline.router.hereapi.com";

/// Configuration for [`HttpIsolineProvider`].
#[derive(Debug, Clone)]
pub struct HttpIsolineProviderConfig {
    /// Base URL for the isoline service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// API key appended as `apiKey`, when the service needs one.
    pub api_key: Option<String>,
}

impl Default for HttpIsolineProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ISOLINE_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            api_key: None,
        }
    }
}

impl HttpIsolineProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Isoline provider querying `GET {base}/v8/isolines`.
///
/// The first polygon's outer boundary is decoded and returned as a [`Ring`].
#[derive(Debug, Clone)]
pub struct HttpIsolineProvider {
    client: Client,
    base_url: Url,
    config: HttpIsolineProviderConfig,
}

impl HttpIsolineProvider {
    /// Create a provider for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpIsolineProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn with_config(config: HttpIsolineProviderConfig) -> Result<Self, ProviderBuildError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = build_client(&config.user_agent, config.timeout)?;
        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpIsolineProviderConfig {
        &self.config
    }

    fn build_isoline_url(&self, request: &IsolineRequest) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}/v8/isolines", url.path().trim_end_matches('/'));
        url.set_path(&path);
        let origin = request.origin();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("origin", &format!("{},{}", origin.lat, origin.lng))
                .append_pair("range[type]", "time")
                .append_pair("range[values]", &request.range_seconds().to_string())
                .append_pair("transportMode", transport_mode(request.transport_mode()))
                .append_pair("routingMode", request.optimize_for());
            if let Some(api_key) = &self.config.api_key {
                query.append_pair("apiKey", api_key);
            }
        }
        url
    }

    /// Decode the first outer boundary of `response`.
    fn convert_response(response: &IsolineResponse) -> Result<Ring, ProviderError> {
        let encoded = response.first_outer().ok_or(ProviderError::NoRoute)?;
        decode(encoded)?
            .into_ring()
            .map_err(|err| ProviderError::ParseError {
                message: format!("isoline boundary is not a ring: {err}"),
            })
    }
}

/// Transport mode name understood by the isoline service.
const fn transport_mode(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Drive => "car",
        TravelMode::Walk => "pedestrian",
        TravelMode::Bike => "bicycle",
    }
}

#[async_trait]
impl IsolineProvider for HttpIsolineProvider {
    async fn fetch_isoline(&self, request: &IsolineRequest) -> Result<Ring, ProviderError> {
        let url = self.build_isoline_url(request);
        debug!(
            "requesting {}s {} isoline",
            request.range_seconds(),
            request.transport_mode()
        );
        let response: IsolineResponse = get_json(&self.client, &url, self.config.timeout).await?;
        Self::convert_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::response::{Isoline, IsolinePolygon};
    use super::*;
    use isochrone_core::{Point, PolylineError};
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> IsolineRequest {
        IsolineRequest::new(Point::new(52.5, 13.4), 900, TravelMode::Bike)
            .expect("valid request")
            .with_optimize_for("fast")
    }

    fn response_with(outer: &str) -> IsolineResponse {
        IsolineResponse {
            isolines: vec![Isoline {
                polygons: vec![IsolinePolygon {
                    outer: outer.to_owned(),
                }],
            }],
        }
    }

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[rstest]
    fn build_isoline_url_encodes_request(request: IsolineRequest) {
        let provider = HttpIsolineProvider::new("https://isoline.example.com/")
            .expect("provider should build");

        let url = provider.build_isoline_url(&request);
        let pairs = query(&url);

        assert_eq!(url.path(), "/v8/isolines");
        assert_eq!(pairs.get("origin").map(String::as_str), Some("52.5,13.4"));
        assert_eq!(pairs.get("range[type]").map(String::as_str), Some("time"));
        assert_eq!(pairs.get("range[values]").map(String::as_str), Some("900"));
        assert_eq!(pairs.get("transportMode").map(String::as_str), Some("bicycle"));
        assert_eq!(pairs.get("routingMode").map(String::as_str), Some("fast"));
        assert!(!pairs.contains_key("apiKey"));
    }

    #[rstest]
    fn build_isoline_url_appends_api_key(request: IsolineRequest) {
        let config = HttpIsolineProviderConfig::new("https://isoline.example.com")
            .with_api_key("secret");
        let provider = HttpIsolineProvider::with_config(config).expect("provider should build");

        let url = provider.build_isoline_url(&request);

        assert_eq!(query(&url).get("apiKey").map(String::as_str), Some("secret"));
    }

    #[rstest]
    fn convert_response_decodes_first_outer_ring() {
        let ring = HttpIsolineProvider::convert_response(&response_with("BFAAAg0mMg0mMAA_zmM_zmMA"))
            .expect("should decode");
        assert_eq!(ring.points().len(), 5);
        assert!(ring.is_closed());
    }

    #[rstest]
    fn convert_response_surfaces_decode_errors() {
        let err = HttpIsolineProvider::convert_response(&response_with("BF!"))
            .expect_err("should fail");
        assert_eq!(
            err,
            ProviderError::Decode(PolylineError::InvalidCharacter {
                character: '!',
                position: 2
            })
        );
    }

    #[rstest]
    fn convert_response_rejects_degenerate_boundary() {
        let err = HttpIsolineProvider::convert_response(&response_with("BFAAAgqjG"))
            .expect_err("should fail");
        assert!(matches!(err, ProviderError::ParseError { .. }));
    }

    #[rstest]
    fn convert_response_without_polygons_is_no_route() {
        let response = IsolineResponse {
            isolines: Vec::new(),
        };
        let err = HttpIsolineProvider::convert_response(&response).expect_err("should fail");
        assert_eq!(err, ProviderError::NoRoute);
    }
}
