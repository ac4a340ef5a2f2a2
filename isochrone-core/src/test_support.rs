//! Deterministic fixtures shared by unit, behaviour and downstream tests.

use async_trait::async_trait;

use crate::isochrone::equirectangular_miles;
use crate::provider::{DirectionsProvider, DirectionsRequest, DirectionsResponse, ProviderError};
use crate::{Point, Ring};

/// Axis-aligned square ring with its south-west corner at (`lat`, `lng`).
///
/// Vertices run south-west, north-west, north-east, south-east and the ring
/// is left open.
///
/// # Panics
///
/// Panics when `side` is zero or any coordinate is non-finite.
#[must_use]
pub fn square_ring(lat: f64, lng: f64, side: f64) -> Ring {
    Ring::new(vec![
        Point::new(lat, lng),
        Point::new(lat + side, lng),
        Point::new(lat + side, lng + side),
        Point::new(lat, lng + side),
    ])
    .expect("square fixture must be a valid ring")
}

/// `DirectionsProvider` that drives in a straight line at a fixed speed.
///
/// Travel time is the equirectangular distance between origin and
/// destination divided by the configured speed, so answers are exact and
/// repeatable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSpeedDirectionsProvider {
    speed_mph: f64,
}

impl ConstantSpeedDirectionsProvider {
    /// Create a provider travelling at `speed_mph`.
    #[must_use]
    pub const fn new(speed_mph: f64) -> Self {
        Self { speed_mph }
    }

    /// Configured speed.
    #[must_use]
    pub const fn speed_mph(&self) -> f64 {
        self.speed_mph
    }
}

#[async_trait]
impl DirectionsProvider for ConstantSpeedDirectionsProvider {
    async fn route_time(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        if self.speed_mph <= 0.0 {
            return Err(ProviderError::NoRoute);
        }
        let distance_miles = equirectangular_miles(request.origin, request.destination);
        Ok(DirectionsResponse {
            time_seconds: distance_miles / self.speed_mph * 3_600.0,
            distance_miles,
        })
    }
}
