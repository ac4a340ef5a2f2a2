//! Test utilities for isoline providers.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use isochrone_core::polyline::decode;
use isochrone_core::{IsolineProvider, IsolineRequest, ProviderError, Ring};

type Responder = dyn Fn(&IsolineRequest) -> Result<Ring, ProviderError> + Send + Sync;

/// Stub `IsolineProvider` for testing.
///
/// # Example
///
/// ```
/// use isochrone_data::isoline::test_support::StubIsolineProvider;
///
/// let provider = StubIsolineProvider::with_polyline("BFAAAg0mMg0mMAA_zmM_zmMA");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Clone)]
pub struct StubIsolineProvider {
    responder: Arc<Responder>,
    calls: Arc<AtomicUsize>,
}

impl fmt::Debug for StubIsolineProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubIsolineProvider")
            .field("responder", &"<closure>")
            .field("calls", &self.call_count())
            .finish()
    }
}

impl StubIsolineProvider {
    /// Create a provider that answers every request with `responder`.
    #[must_use]
    pub fn with_fn<F>(responder: F) -> Self
    where
        F: Fn(&IsolineRequest) -> Result<Ring, ProviderError> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a provider that returns `ring` for every request.
    #[must_use]
    pub fn with_ring(ring: Ring) -> Self {
        Self::with_fn(move |_| Ok(ring.clone()))
    }

    /// Create a provider that decodes `encoded` for every request, as the
    /// HTTP provider does with a service response.
    #[must_use]
    pub fn with_polyline(encoded: impl Into<String>) -> Self {
        let encoded = encoded.into();
        Self::with_fn(move |_| {
            decode(&encoded)?
                .into_ring()
                .map_err(|err| ProviderError::ParseError {
                    message: err.to_string(),
                })
        })
    }

    /// Create a provider that fails every request with `error`.
    #[must_use]
    pub fn with_error(error: ProviderError) -> Self {
        Self::with_fn(move |_| Err(error.clone()))
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IsolineProvider for StubIsolineProvider {
    async fn fetch_isoline(&self, request: &IsolineRequest) -> Result<Ring, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.responder)(request)
    }
}
