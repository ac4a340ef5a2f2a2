//! Provider adapters and async orchestration for the isochrone engine.
//!
//! Responsibilities:
//! - Implement the `isochrone-core` provider traits over HTTP routing and
//!   isoline services.
//! - Run provider queries concurrently with per-query timeouts and
//!   cancellation.
//! - Estimate travel-time rings from cardinal route probes.
//!
//! Boundaries:
//! - Do not encode geometry rules (live in `isochrone-core`).
//! - Keep blocking I/O off async executors; every client here is async.
//!
//! Invariants:
//! - Provider failures degrade estimates rather than abort them.
//! - No global mutable state.

mod http;

pub mod estimator;
pub mod isoline;
pub mod routing;

pub use estimator::{EstimatorConfig, IsochroneRingEstimator};
pub use http::{DEFAULT_USER_AGENT, ProviderBuildError};
