//! Isoline providers and the fetch-then-intersect pipeline.
//!
//! [`HttpIsolineProvider`] fetches a travel-time polygon per location and
//! decodes its flexible-polyline boundary. [`resolve_isoline_overlap`] runs
//! those fetches concurrently and hands the rings to an
//! [`OverlapResolver`](isochrone_core::OverlapResolver).

mod overlap;
mod provider;
mod response;

#[doc(hidden)]
pub mod test_support;

pub use overlap::resolve_isoline_overlap;
pub use provider::{DEFAULT_ISOLINE_BASE_URL, HttpIsolineProvider, HttpIsolineProviderConfig};
