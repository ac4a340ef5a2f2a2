//! Facade crate for the isochrone geometry engine.
//!
//! This crate re-exports the core geometry types and exposes the HTTP
//! providers and ring estimator behind the `providers` feature.

#![forbid(unsafe_code)]

pub use isochrone_core::{
    CardinalDistances, DirectionsProvider, DirectionsRequest, DirectionsResponse, Geometry,
    IsochroneRing, IsolineProvider, IsolineRequest, KernelConfig, OverlapResolver, OverlapResult,
    Point, PolygonKernel, PolylineDecodeResult, PolylineError, ProviderError, Ring, RingError,
    ThirdDimension, TravelMode, UnknownTravelMode, synthesize_ring,
};
pub use isochrone_core::{isochrone, kernel, overlap, polyline, provider};

#[cfg(feature = "providers")]
pub use isochrone_data::{
    EstimatorConfig, IsochroneRingEstimator, ProviderBuildError,
    isoline::{HttpIsolineProvider, HttpIsolineProviderConfig, resolve_isoline_overlap},
    routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig},
};
