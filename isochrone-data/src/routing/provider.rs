//! `DirectionsProvider` backed by OSRM's Route API.

use std::time::Duration;

use async_trait::async_trait;
use isochrone_core::{
    DirectionsProvider, DirectionsRequest, DirectionsResponse, Point, ProviderError, TravelMode,
};
use log::debug;
use reqwest::Client;
use url::Url;

use crate::http::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ProviderBuildError, build_client, get_json,
    parse_base_url,
};

use super::osrm::RouteResponse;

/// Metres in one international mile.
pub const METERS_PER_MILE: f64 = 1_609.344;

/// Configuration for [`HttpDirectionsProvider`].
#[derive(Debug, Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpDirectionsProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpDirectionsProviderConfig {
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
}

/// Directions provider querying an OSRM server.
///
/// Each call issues one `GET /route/v1/{profile}/{origin};{destination}`
/// request with `overview=false`, since only duration and distance are used.
#[derive(Debug, Clone)]
pub struct HttpDirectionsProvider {
    client: Client,
    base_url: Url,
    config: HttpDirectionsProviderConfig,
}

impl HttpDirectionsProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
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
    pub const fn config(&self) -> &HttpDirectionsProviderConfig {
        &self.config
    }

    /// Build the Route API URL for `request`.
    ///
    /// Coordinates are `lng,lat` pairs separated by a semicolon.
    fn build_route_url(&self, request: &DirectionsRequest) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}/route/v1/{}/{};{}",
            url.path().trim_end_matches('/'),
            profile(request.mode),
            coordinate(request.origin),
            coordinate(request.destination),
        );
        url.set_path(&path);
        url.query_pairs_mut().append_pair("overview", "false");
        url
    }

    /// Convert an OSRM response into a `DirectionsResponse`.
    fn convert_response(response: RouteResponse) -> Result<DirectionsResponse, ProviderError> {
        if response.is_no_route() {
            return Err(ProviderError::NoRoute);
        }
        if !response.is_ok() {
            return Err(ProviderError::ServiceError {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::NoRoute)?;
        if !(route.duration.is_finite() && route.duration >= 0.0) {
            return Err(ProviderError::ParseError {
                message: format!("OSRM returned invalid duration {}", route.duration),
            });
        }

        Ok(DirectionsResponse {
            time_seconds: route.duration,
            distance_miles: route.distance / METERS_PER_MILE,
        })
    }
}

/// OSRM profile name for a travel mode.
const fn profile(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Drive => "driving",
        TravelMode::Walk => "walking",
        TravelMode::Bike => "cycling",
    }
}

fn coordinate(point: Point) -> String {
    format!("{},{}", point.lng, point.lat)
}

#[async_trait]
impl DirectionsProvider for HttpDirectionsProvider {
    async fn route_time(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        let url = self.build_route_url(request);
        debug!("requesting route {url}");
        let response: RouteResponse = get_json(&self.client, &url, self.config.timeout).await?;
        Self::convert_response(response)
    }
}
