//! Core geometry for the isochrone engine.
//!
//! Responsibilities:
//! - Decode flexible polylines returned by routing services.
//! - Intersect, merge and measure travel-time polygons.
//! - Resolve the region reachable from every location in a group.
//! - Synthesize approximate travel-time rings from cardinal reach distances.
//! - Define the provider traits the I/O adapters implement.
//!
//! Boundaries:
//! - No network or file I/O; adapters live in `isochrone-data`.
//! - No global state. Every call works on its inputs and returns new values.
//!
//! Invariants:
//! - Kernel and resolver calls never panic on malformed geometry; failures
//!   degrade to "no overlap".
//! - Polyline decoding is the one operation that surfaces malformed input as
//!   an error.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod geometry;
pub mod isochrone;
pub mod kernel;
pub mod overlap;
mod point;
pub mod polyline;
pub mod provider;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use geometry::Geometry;
pub use isochrone::{
    CardinalDistances, IsochroneRing, TravelMode, UnknownTravelMode, synthesize_ring,
};
pub use kernel::{KernelConfig, PolygonKernel};
pub use overlap::{OverlapResolver, OverlapResult};
pub use point::{Point, Ring, RingError};
pub use polyline::{PolylineDecodeResult, PolylineError, ThirdDimension};
pub use provider::{
    DirectionsProvider, DirectionsRequest, DirectionsResponse, IsolineProvider, IsolineRequest,
    ProviderError,
};
