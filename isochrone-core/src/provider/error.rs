use thiserror::Error;

use crate::polyline::PolylineError;

/// Errors returned by [`DirectionsProvider`](super::DirectionsProvider) and
/// [`IsolineProvider`](super::IsolineProvider) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Timeout that elapsed, in whole seconds.
        timeout_secs: u64,
    },
    /// The connection failed before a response arrived.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service reported a failure in its response body.
    #[error("service returned {code}: {message}")]
    ServiceError {
        /// Service-specific status code.
        code: String,
        /// Service-provided message, possibly empty.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse response: {message}")]
    ParseError {
        /// Parser error description.
        message: String,
    },
    /// The service found no route or polygon for the request.
    #[error("no route found")]
    NoRoute,
    /// An isoline range below the supported minimum was requested.
    #[error("isoline range must be at least {minimum}s, got {range_seconds}s")]
    InvalidRange {
        /// Requested range in seconds.
        range_seconds: u32,
        /// Smallest accepted range in seconds.
        minimum: u32,
    },
    /// A polyline in the response failed to decode.
    #[error("failed to decode polyline: {0}")]
    Decode(#[from] PolylineError),
}
