//! Test utilities for directions providers.
//!
//! [`StubDirectionsProvider`] answers route queries from a fixed response, a
//! fixed error or a closure, optionally after a simulated latency, and counts
//! the calls it receives.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use isochrone_core::{DirectionsProvider, DirectionsRequest, DirectionsResponse, ProviderError};

type Responder =
    dyn Fn(&DirectionsRequest) -> Result<DirectionsResponse, ProviderError> + Send + Sync;

/// Stub `DirectionsProvider` for testing.
///
/// Clones share the same call counter.
///
/// # Example
///
/// ```
/// use isochrone_core::{DirectionsResponse, ProviderError};
/// use isochrone_data::routing::test_support::StubDirectionsProvider;
///
/// let provider = StubDirectionsProvider::with_response(DirectionsResponse {
///     time_seconds: 600.0,
///     distance_miles: 4.0,
/// });
/// assert_eq!(provider.call_count(), 0);
///
/// let failing = StubDirectionsProvider::with_error(ProviderError::NoRoute);
/// assert_eq!(failing.call_count(), 0);
/// ```
#[derive(Clone)]
pub struct StubDirectionsProvider {
    responder: Arc<Responder>,
    latency: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl fmt::Debug for StubDirectionsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubDirectionsProvider")
            .field("responder", &"<closure>")
            .field("latency", &self.latency)
            .field("calls", &self.call_count())
            .finish()
    }
}

impl StubDirectionsProvider {
    /// Create a provider that answers every request with `responder`.
    #[must_use]
    pub fn with_fn<F>(responder: F) -> Self
    where
        F: Fn(&DirectionsRequest) -> Result<DirectionsResponse, ProviderError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            responder: Arc::new(responder),
            latency: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a provider that returns `response` for every request.
    #[must_use]
    pub fn with_response(response: DirectionsResponse) -> Self {
        Self::with_fn(move |_| Ok(response))
    }

    /// Create a provider that fails every request with `error`.
    #[must_use]
    pub fn with_error(error: ProviderError) -> Self {
        Self::with_fn(move |_| Err(error.clone()))
    }

    /// Delay every answer by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for StubDirectionsProvider {
    async fn route_time(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        (self.responder)(request)
    }
}
