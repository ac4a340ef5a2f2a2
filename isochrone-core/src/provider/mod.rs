//! Interfaces to routing services consulted by the engine.
//!
//! [`DirectionsProvider`] answers point-to-point travel times and feeds the
//! ring estimator. [`IsolineProvider`] returns true travel-time polygons,
//! already decoded into a [`Ring`](crate::Ring), for the overlap resolver.
//! Both traits are asynchronous and object safe; implementations live in
//! `isochrone-data`.

mod directions;
mod error;
mod isoline;

pub use directions::{DirectionsProvider, DirectionsRequest, DirectionsResponse};
pub use error::ProviderError;
pub use isoline::{DEFAULT_OPTIMIZE_FOR, IsolineProvider, IsolineRequest, MIN_RANGE_SECONDS};
