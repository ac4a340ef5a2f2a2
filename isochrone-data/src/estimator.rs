//! Approximate travel-time rings from a handful of route queries.
//!
//! For driving, each cardinal direction is probed at two candidate distances
//! around the naive estimate. All eight queries run concurrently under
//! independent timeouts. The candidate whose travel time lands closest to the
//! target wins; a direction with no surviving candidate keeps the naive
//! distance. Other modes skip the queries entirely. The ring is then
//! synthesized by angular interpolation between the four cardinal distances.

use std::time::Duration;

use futures_util::future::{join, join_all};
use isochrone_core::isochrone::{
    Cardinal, CardinalDistances, DEFAULT_SAMPLE_DIRECTIONS, naive_distance_miles, project,
    synthesize_ring,
};
use isochrone_core::{DirectionsProvider, DirectionsRequest, IsochroneRing, Point, TravelMode};
use log::{debug, info};
use tokio_util::sync::CancellationToken;

/// Default per-query timeout in seconds.
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;

/// Tunables for [`IsochroneRingEstimator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    /// Evenly spaced bearings in the synthesized ring.
    pub sample_directions: usize,
    /// Budget for each route query.
    pub query_timeout: Duration,
    /// Nearer candidate as a fraction of the naive distance.
    pub refine_low: f64,
    /// Farther candidate as a fraction of the naive distance.
    pub refine_high: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            sample_directions: DEFAULT_SAMPLE_DIRECTIONS,
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            refine_low: 0.9,
            refine_high: 1.1,
        }
    }
}

impl EstimatorConfig {
    /// Set the number of sample bearings.
    #[must_use]
    pub const fn with_sample_directions(mut self, sample_directions: usize) -> Self {
        self.sample_directions = sample_directions;
        self
    }

    /// Set the per-query timeout.
    #[must_use]
    pub const fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Set both candidate fractions.
    #[must_use]
    pub const fn with_refinement(mut self, low: f64, high: f64) -> Self {
        self.refine_low = low;
        self.refine_high = high;
        self
    }
}

/// A candidate distance and the travel time the provider reported for it.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    miles: f64,
    minutes: f64,
}

/// Builds approximate isochrone rings around a centre point.
///
/// # Example
///
/// ```
/// use isochrone_core::isochrone::equirectangular_miles;
/// use isochrone_core::{Point, ProviderError, TravelMode};
/// use isochrone_data::estimator::IsochroneRingEstimator;
/// use isochrone_data::routing::test_support::StubDirectionsProvider;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let provider = StubDirectionsProvider::with_error(ProviderError::NoRoute);
/// let estimator = IsochroneRingEstimator::new(provider);
/// let center = Point::new(40.0, -75.0);
///
/// let ring = estimator.estimate(center, 30, TravelMode::Walk).await;
/// assert_eq!(ring.points.len(), 16);
/// assert!((equirectangular_miles(center, ring.points[0]) - 1.5).abs() < 1e-9);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IsochroneRingEstimator<P> {
    provider: P,
    config: EstimatorConfig,
}

impl<P> IsochroneRingEstimator<P>
where
    P: DirectionsProvider,
{
    /// Create an estimator with default configuration.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, EstimatorConfig::default())
    }

    /// Create an estimator with explicit configuration.
    #[must_use]
    pub const fn with_config(provider: P, config: EstimatorConfig) -> Self {
        Self { provider, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Underlying directions provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Estimate the boundary reachable from `center` within `minutes`.
    ///
    /// Always returns a ring. Provider failures and timeouts only reduce
    /// accuracy.
    pub async fn estimate(&self, center: Point, minutes: u32, mode: TravelMode) -> IsochroneRing {
        let distances = self.cardinal_distances(center, minutes, mode).await;
        synthesize_ring(center, &distances, minutes, self.config.sample_directions)
    }

    /// Like [`Self::estimate`], abandoning in-flight queries once `token`
    /// fires.
    ///
    /// Returns `None` when cancelled before the ring is complete.
    pub async fn estimate_cancellable(
        &self,
        center: Point,
        minutes: u32,
        mode: TravelMode,
        token: &CancellationToken,
    ) -> Option<IsochroneRing> {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!("isochrone estimate for {minutes} min cancelled");
                None
            }
            ring = self.estimate(center, minutes, mode) => Some(ring),
        }
    }

    /// Reach along each cardinal direction, refined for driving.
    pub async fn cardinal_distances(
        &self,
        center: Point,
        minutes: u32,
        mode: TravelMode,
    ) -> CardinalDistances {
        let naive = naive_distance_miles(minutes, mode);
        let mut distances = CardinalDistances::uniform(naive);
        if mode != TravelMode::Drive {
            return distances;
        }

        let refined = join_all(
            Cardinal::ALL
                .into_iter()
                .map(|direction| self.refine_direction(center, direction, minutes, naive)),
        )
        .await;
        for (direction, miles) in Cardinal::ALL.into_iter().zip(refined) {
            distances.set(direction, miles);
        }
        distances
    }

    async fn refine_direction(
        &self,
        center: Point,
        direction: Cardinal,
        minutes: u32,
        naive: f64,
    ) -> f64 {
        let (low, high) = join(
            self.query_candidate(center, direction, naive * self.config.refine_low),
            self.query_candidate(center, direction, naive * self.config.refine_high),
        )
        .await;

        let target = f64::from(minutes);
        let best = [low, high]
            .into_iter()
            .flatten()
            .min_by(|a, b| {
                (a.minutes - target)
                    .abs()
                    .total_cmp(&(b.minutes - target).abs())
            });
        match best {
            Some(candidate) => candidate.miles,
            None => {
                info!("no route answers towards {direction:?}; using naive {naive:.2} mi");
                naive
            }
        }
    }

    async fn query_candidate(&self, center: Point, direction: Cardinal, miles: f64) -> Option<Candidate> {
        let request = DirectionsRequest {
            origin: center,
            destination: project(center, direction.bearing_deg(), miles),
            mode: TravelMode::Drive,
        };
        match tokio::time::timeout(self.config.query_timeout, self.provider.route_time(&request))
            .await
        {
            Ok(Ok(response)) if response.time_seconds.is_finite() => Some(Candidate {
                miles,
                minutes: response.minutes(),
            }),
            Ok(Ok(response)) => {
                debug!(
                    "dropping {direction:?} query at {miles:.2} mi: non-finite time {}",
                    response.time_seconds
                );
                None
            }
            Ok(Err(err)) => {
                debug!("dropping {direction:?} query at {miles:.2} mi: {err}");
                None
            }
            Err(_) => {
                debug!(
                    "dropping {direction:?} query at {miles:.2} mi: timed out after {:?}",
                    self.config.query_timeout
                );
                None
            }
        }
    }
}
