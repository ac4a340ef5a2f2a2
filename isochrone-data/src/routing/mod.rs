//! HTTP-based directions providers for routing services.
//!
//! [`HttpDirectionsProvider`] implements
//! [`isochrone_core::DirectionsProvider`] on top of the OSRM Route API. It
//! answers one origin/destination pair per request, which is all the ring
//! estimator needs.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use isochrone_core::{DirectionsProvider, DirectionsRequest, Point, TravelMode};
//! use isochrone_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpDirectionsProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpDirectionsProvider::with_config(config)?;
//!
//! let request = DirectionsRequest {
//!     origin: Point::new(40.0, -75.0),
//!     destination: Point::new(40.2, -75.0),
//!     mode: TravelMode::Drive,
//! };
//! let response = provider.route_time(&request).await?;
//! println!("{:.1} minutes", response.minutes());
//! # Ok(())
//! # }
//! ```

mod osrm;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{HttpDirectionsProvider, HttpDirectionsProviderConfig, METERS_PER_MILE};
