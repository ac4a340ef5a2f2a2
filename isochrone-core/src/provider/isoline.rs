//! Travel-time polygon queries.

use async_trait::async_trait;

use crate::{Point, Ring, TravelMode};

use super::ProviderError;

/// Smallest isoline range, in seconds, a provider accepts.
pub const MIN_RANGE_SECONDS: u32 = 60;

/// Routing preference sent when the caller does not choose one.
pub const DEFAULT_OPTIMIZE_FOR: &str = "fast";

/// A request for the area reachable from `origin` within `range_seconds`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsolineRequest {
    origin: Point,
    range_seconds: u32,
    transport_mode: TravelMode,
    optimize_for: String,
}

impl IsolineRequest {
    /// Validate and build a request.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidRange`] when `range_seconds` is below
    /// [`MIN_RANGE_SECONDS`].
    ///
    /// # Examples
    /// ```
    /// use isochrone_core::provider::{IsolineRequest, ProviderError};
    /// use isochrone_core::{Point, TravelMode};
    ///
    /// let request = IsolineRequest::new(Point::new(52.5, 13.4), 900, TravelMode::Bike)?;
    /// assert_eq!(request.range_seconds(), 900);
    /// assert!(IsolineRequest::new(Point::new(52.5, 13.4), 30, TravelMode::Bike).is_err());
    /// # Ok::<(), ProviderError>(())
    /// ```
    pub fn new(
        origin: Point,
        range_seconds: u32,
        transport_mode: TravelMode,
    ) -> Result<Self, ProviderError> {
        if range_seconds < MIN_RANGE_SECONDS {
            return Err(ProviderError::InvalidRange {
                range_seconds,
                minimum: MIN_RANGE_SECONDS,
            });
        }
        Ok(Self {
            origin,
            range_seconds,
            transport_mode,
            optimize_for: DEFAULT_OPTIMIZE_FOR.to_owned(),
        })
    }

    /// Build a request for a whole number of minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidRange`] for ranges under one minute.
    pub fn from_minutes(
        origin: Point,
        minutes: u32,
        transport_mode: TravelMode,
    ) -> Result<Self, ProviderError> {
        Self::new(origin, minutes.saturating_mul(60), transport_mode)
    }

    /// Set the routing preference passed through to the service.
    #[must_use]
    pub fn with_optimize_for(mut self, optimize_for: impl Into<String>) -> Self {
        self.optimize_for = optimize_for.into();
        self
    }

    /// Centre of the isoline.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Travel budget in seconds.
    #[must_use]
    pub const fn range_seconds(&self) -> u32 {
        self.range_seconds
    }

    /// How the area is travelled.
    #[must_use]
    pub const fn transport_mode(&self) -> TravelMode {
        self.transport_mode
    }

    /// Routing preference.
    #[must_use]
    pub fn optimize_for(&self) -> &str {
        &self.optimize_for
    }
}

/// Fetch travel-time polygons.
#[async_trait]
pub trait IsolineProvider: Send + Sync {
    /// Outer boundary of the area reachable for `request`.
    ///
    /// Implementations decode the service's polyline before returning and
    /// surface decode failures as [`ProviderError::Decode`].
    async fn fetch_isoline(&self, request: &IsolineRequest) -> Result<Ring, ProviderError>;
}
