//! Fetch isolines for a group of locations and resolve their overlap.

use futures_util::future::try_join_all;
use isochrone_core::{IsolineProvider, IsolineRequest, OverlapResolver, OverlapResult, ProviderError};
use log::debug;

/// Fetch one isoline per request concurrently and intersect them.
///
/// Fewer than two requests resolve to [`OverlapResult::none`] without
/// contacting the provider. `location_ids` label the requests in log lines.
///
/// # Errors
///
/// Returns the first [`ProviderError`] raised while fetching. Geometry
/// failures never surface; they degrade to "no overlap".
///
/// # Example
///
/// ```no_run
/// use isochrone_core::{IsolineRequest, OverlapResolver, Point, TravelMode};
/// use isochrone_data::isoline::{HttpIsolineProvider, resolve_isoline_overlap};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = HttpIsolineProvider::new("https://isoline.example.com")?;
/// let requests = [
///     IsolineRequest::from_minutes(Point::new(52.52, 13.40), 20, TravelMode::Bike)?,
///     IsolineRequest::from_minutes(Point::new(52.50, 13.45), 20, TravelMode::Bike)?,
/// ];
/// let result =
///     resolve_isoline_overlap(&provider, &requests, &OverlapResolver::default(), None).await?;
/// println!("overlap: {}", result.has_overlap);
/// # Ok(())
/// # }
/// ```
pub async fn resolve_isoline_overlap<P>(
    provider: &P,
    requests: &[IsolineRequest],
    resolver: &OverlapResolver,
    location_ids: Option<&[String]>,
) -> Result<OverlapResult, ProviderError>
where
    P: IsolineProvider + ?Sized,
{
    if requests.len() < 2 {
        debug!("{} isoline request(s); nothing to overlap", requests.len());
        return Ok(OverlapResult::none());
    }
    let rings = try_join_all(requests.iter().map(|request| provider.fetch_isoline(request))).await?;
    Ok(resolver.resolve(&rings, location_ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isoline::test_support::StubIsolineProvider;
    use isochrone_core::test_support::square_ring;
    use isochrone_core::{Point, TravelMode};
    use rstest::rstest;

    fn request_at(lat: f64, lng: f64) -> IsolineRequest {
        IsolineRequest::new(Point::new(lat, lng), 600, TravelMode::Walk).expect("valid request")
    }

    fn squares_by_origin() -> StubIsolineProvider {
        StubIsolineProvider::with_fn(|request| {
            let origin = request.origin();
            Ok(square_ring(origin.lat - 1.0, origin.lng - 1.0, 2.0))
        })
    }

    #[rstest]
    #[tokio::test]
    async fn overlapping_isolines_resolve_to_shared_region() {
        let provider = squares_by_origin();
        let requests = [request_at(1.0, 1.0), request_at(2.0, 2.0)];

        let result = resolve_isoline_overlap(&provider, &requests, &OverlapResolver::default(), None)
            .await
            .expect("fetch should succeed");

        assert!(result.has_overlap);
        assert_eq!(provider.call_count(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn single_request_skips_the_provider() {
        let provider = squares_by_origin();

        let result =
            resolve_isoline_overlap(&provider, &[request_at(1.0, 1.0)], &OverlapResolver::default(), None)
                .await
                .expect("nothing to fetch");

        assert_eq!(result, OverlapResult::none());
        assert_eq!(provider.call_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_failures_propagate() {
        let provider = StubIsolineProvider::with_error(ProviderError::NoRoute);
        let requests = [request_at(1.0, 1.0), request_at(2.0, 2.0)];

        let err = resolve_isoline_overlap(&provider, &requests, &OverlapResolver::default(), None)
            .await
            .expect_err("fetch should fail");

        assert_eq!(err, ProviderError::NoRoute);
    }
}
