//! Point-to-point travel-time queries.

use async_trait::async_trait;

use crate::{Point, TravelMode};

use super::ProviderError;

/// A single route-time query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    /// Start of the route.
    pub origin: Point,
    /// End of the route.
    pub destination: Point,
    /// How the route is travelled.
    pub mode: TravelMode,
}

/// Travel time and distance for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DirectionsResponse {
    /// Travel time in seconds.
    pub time_seconds: f64,
    /// Route length in miles.
    pub distance_miles: f64,
}

impl DirectionsResponse {
    /// Travel time in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.time_seconds / 60.0
    }
}

/// Answer route-time queries.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use isochrone_core::provider::{
///     DirectionsProvider, DirectionsRequest, DirectionsResponse, ProviderError,
/// };
///
/// struct TenMinutes;
///
/// #[async_trait]
/// impl DirectionsProvider for TenMinutes {
///     async fn route_time(
///         &self,
///         _request: &DirectionsRequest,
///     ) -> Result<DirectionsResponse, ProviderError> {
///         Ok(DirectionsResponse {
///             time_seconds: 600.0,
///             distance_miles: 5.0,
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Travel time from `request.origin` to `request.destination`.
    ///
    /// Implementations return [`ProviderError::NoRoute`] when the service
    /// finds no path between the points.
    async fn route_time(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError>;
}

#[async_trait]
impl<P> DirectionsProvider for Box<P>
where
    P: DirectionsProvider + ?Sized,
{
    async fn route_time(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        (**self).route_time(request).await
    }
}
